pub mod aggregate;
pub mod gateway;
pub mod navigate;
pub mod normalize;
pub mod query;
pub mod service;

pub use crate::domain::model::{
    Driver, Lap, Meeting, Navigation, Position, Session, SessionResult, SortConfig, SortOption,
    SortOrder, Team,
};
pub use crate::domain::ports::{ConfigProvider, RaceDataSource};
pub use crate::utils::error::Result;
