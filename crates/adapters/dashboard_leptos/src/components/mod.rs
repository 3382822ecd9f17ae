mod add_website_form;
mod check_all_button;
mod website_list;

pub use add_website_form::AddWebsiteForm;
pub use check_all_button::CheckAllButton;
pub use website_list::WebsiteList;
