// login page
pub const LOGIN: &str = r#"
login_text = Sign In
email = e-mail
password = password
login_failed = Login failed, please check your email and password.
"#;

// user list page
pub const USER_LIST: &str = r#"
title = User List
loading = Loading users...
fetch_failed = Failed to fetch users
retry = Retry
logout = Logout
toggle_theme = Toggle Dark Mode
edit = Edit
delete = Delete
previous = Previous
next = Next
page_of = Page { $current } of { $total }
empty = No users on this page.
updated = { $name } updated
deleted = { $name } deleted
"#;

pub const EDIT_USER: &str = r#"
title = Edit User
first_name = First Name
last_name = Last Name
email = Email
cancel = Cancel
update = Update
updating = Updating...
"#;

pub const DELETE_USER: &str = r#"
title = Confirm Deletion
confirm = Are you sure you want to delete { $name }?
cancel = Cancel
delete = Delete
deleting = Deleting...
"#;

pub const FORM_ERROR: &str = r#"
empty_field = All fields are required.
update_failed = Failed to update user. Please try again.
delete_failed = Failed to delete user. Please try again.
"#;
