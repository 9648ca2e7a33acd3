// 登录页
pub const LOGIN: &str = r#"
login_text = 登录
email = 邮箱
password = 密码
login_failed = 登录失败，请检查邮箱和密码
"#;

// 用户列表页
pub const USER_LIST: &str = r#"
title = 用户列表
loading = 正在加载用户...
fetch_failed = 获取用户失败
retry = 重试
logout = 退出登录
toggle_theme = 切换深色模式
edit = 编辑
delete = 删除
previous = 上一页
next = 下一页
page_of = 第 { $current } 页，共 { $total } 页
empty = 本页没有用户
updated = 已更新 { $name }
deleted = 已删除 { $name }
"#;

pub const EDIT_USER: &str = r#"
title = 编辑用户
first_name = 名
last_name = 姓
email = 邮箱
cancel = 取消
update = 更新
updating = 更新中...
"#;

pub const DELETE_USER: &str = r#"
title = 确认删除
confirm = 确定要删除 { $name } 吗？
cancel = 取消
delete = 删除
deleting = 删除中...
"#;

pub const FORM_ERROR: &str = r#"
empty_field = 所有字段均为必填项
update_failed = 更新用户失败，请重试
delete_failed = 删除用户失败，请重试
"#;
