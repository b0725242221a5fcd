mod query_list;
pub mod recent_events;
pub mod recent_render;
mod recent_state;
pub mod view;

pub use query_list::{RecentQueryList, normalize_query};
pub use recent_events::{EventResponse, SearchEvent};
pub use recent_state::RecentQueries;
