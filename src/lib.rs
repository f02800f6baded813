pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{file::FileConfig, CliConfig};
pub use core::gateway::OpenF1Gateway;
pub use core::normalize::CountryCatalog;
pub use core::service::{DriverDetail, PaddockService};
pub use domain::model::{
    Driver, Lap, Meeting, Navigation, Position, Session, SessionResult, SortConfig, SortOption,
    SortOrder, Team,
};
pub use domain::ports::{ConfigProvider, RaceDataSource};
pub use utils::error::{PaddockError, Result};
