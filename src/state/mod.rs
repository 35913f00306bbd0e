pub mod app_state;

pub use app_state::{
    AppState, CatalogStatus, FormMessage, FormStatus, IncrementalUpdate, UpdateType,
};
