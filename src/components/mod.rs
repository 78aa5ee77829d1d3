//! UI Components
//!
//! Pages and the pieces of the list editor.

mod edit_todo_list;
mod home_page;
mod inline_edit;
mod nav_bar;
mod not_found;
mod spinner;
mod todo_input;
mod todo_list;
mod todo_list_item;
mod todo_list_name;

pub use edit_todo_list::EditTodoList;
pub use home_page::HomePage;
pub use nav_bar::NavBar;
pub use not_found::NotFound;
