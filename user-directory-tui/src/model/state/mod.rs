//! 页面数据状态
//!
//! 每个切片只被自己的 Update 子模块修改，View 层只读。

mod modal;
mod pager;
mod users;

pub use modal::{Modal, ModalState};
pub use pager::PagerState;
pub use users::{LoadState, UsersState};
