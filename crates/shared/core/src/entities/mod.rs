mod quote;
mod watch_list;

pub use quote::Quote;
pub use watch_list::WatchList;
