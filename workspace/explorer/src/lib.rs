//! State machine for the EAI forecast explorer.
//!
//! The explorer drives a chain of dependent remote lookups
//! (type indicator → area → station), gates the forecast request behind a
//! successfully loaded historical series, and stitches the two series into
//! one continuous chart view.
//!
//! The crate is deliberately free of any UI or HTTP dependency: mutators on
//! [`state::Explorer`] return [`state::Command`] values describing the remote
//! call to dispatch, and the caller feeds the outcome back through the
//! matching `resolve_*` method together with the [`state::Ticket`] issued at
//! dispatch time. Responses whose ticket no longer matches the current
//! generation of their level are discarded, so a superseded request can
//! never overwrite newer state no matter when it completes.

pub mod error;
pub mod selection;
pub mod series;
pub mod state;
pub mod stitch;
pub mod status;

pub use error::FetchError;
pub use selection::{decompose, SampleType, Selection, TypeIndicator, WaterLayer};
pub use series::{ForecastPoint, HistoricalPoint};
pub use state::{Command, Explorer, HistoricalQuery, LoadState, Ticket};
pub use stitch::{stitch, ChartPoint, StitchedSeries};
pub use status::{classify, Status, StatusLabel, GOOD_THRESHOLD, WARNING_THRESHOLD};
