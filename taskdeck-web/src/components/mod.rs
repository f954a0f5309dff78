pub(crate) mod pagination;
pub(crate) mod task_form;
pub(crate) mod task_list;

pub use pagination::Pagination;
pub use task_form::TaskForm;
pub use task_list::TaskList;
