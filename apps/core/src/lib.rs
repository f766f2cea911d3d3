// Shared by the web page and the `mirage` command-line tool
pub mod assemble;
pub mod charts;
pub mod domain;
pub mod error;
pub mod loader;
pub mod state;
pub mod table;
pub mod view;

pub use domain::{Axis, AxisScores, Entry, ResultSet, Track, TrackScores};
pub use error::LeaderboardError;
pub use state::Leaderboard;
pub use view::{apply, FilteredView, SortKey, ViewState};
