//! Interactive bisection sessions.
//!
//! A [`Session`] owns everything a root-finder front end needs between
//! clicks: the compiled expression, the iteration records produced so far,
//! and whether a step-by-step run is in progress. Front ends read records,
//! a [`Summary`] and a plot [`Frame`] back out and render them however they
//! like.
//!
//! ```
//! use rootstep_session::{Inputs, Session, Summary};
//!
//! let mut session = Session::new();
//! let records = session.calculate(&Inputs::example()).unwrap();
//! let summary = Summary::from_records(records).unwrap();
//!
//! assert_eq!(summary.iterations, 14);
//! assert!((summary.root - 1.521_38).abs() < 1e-4);
//! ```

mod error;
mod inputs;
mod plot;
mod session;
mod summary;

pub use error::Error;
pub use inputs::Inputs;
pub use plot::{Frame, Overlay, SAMPLE_INTERVALS};
pub use session::{Session, SessionState, StepReport};
pub use summary::Summary;

pub use rootstep_solvers::equation::bisection::{Config, IterationRecord, SignClass};
