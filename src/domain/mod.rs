//! Pure data types: personas, user inputs, province cost schedules and results.
//! No I/O lives here.

pub mod inputs;
pub mod persona;
pub mod province;
pub mod results;

pub use inputs::*;
pub use persona::*;
pub use province::*;
pub use results::*;
