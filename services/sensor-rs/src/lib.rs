//! Road sensor simulator: posts fake ultrasonic / MQ-135 readings to the
//! road backend at a fixed pace.

pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod reading;
pub mod sender;
pub mod transport;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use driver::Driver;
pub use error::{DeliveryError, Error};
pub use reading::Reading;
pub use sender::{Outcome, Sender};
pub use transport::{HttpTransport, Transport};
