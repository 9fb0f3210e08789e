//! UI Components
//!
//! Route page components.

mod alert_banner;
mod contract_search;
mod finalize_button;
mod progress_bar;
mod route_edit_form;
mod task_list_view;
mod task_row;

pub use alert_banner::{show_error, AlertBanner};
pub use contract_search::ContractSearch;
pub use finalize_button::FinalizeButton;
pub use progress_bar::ProgressBar;
pub use route_edit_form::RouteEditForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
