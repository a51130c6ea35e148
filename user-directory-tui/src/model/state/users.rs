//! 用户列表加载状态
//!
//! 加载生命周期：Idle → Loading → Loaded / Failed。
//! Loaded 与 Failed 是终态，进程内没有重试迁移；重新加载需要重启应用。

use user_directory_core::User;

/// 加载生命周期
#[derive(Debug, Default)]
pub enum LoadState {
    /// 尚未发起请求
    #[default]
    Idle,
    /// 请求进行中
    Loading,
    /// 加载成功，持有完整集合
    Loaded(Vec<User>),
    /// 加载失败，持有面向用户的错误文本
    Failed(String),
}

/// 用户列表状态
#[derive(Debug, Default)]
pub struct UsersState {
    /// 当前加载状态
    pub load: LoadState,
}

impl UsersState {
    /// 创建新的用户列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle → Loading（应用启动时调用一次）
    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Loading → Loaded
    pub fn set_loaded(&mut self, users: Vec<User>) {
        self.load = LoadState::Loaded(users);
    }

    /// Loading → Failed
    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    /// 是否正在加载
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Idle | LoadState::Loading)
    }

    /// 加载失败时的错误文本
    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// 已加载的集合（未加载完成时为空切片）
    pub fn users(&self) -> &[User] {
        match &self.load {
            LoadState::Loaded(users) => users,
            _ => &[],
        }
    }

    /// 集合大小
    pub fn len(&self) -> usize {
        self.users().len()
    }

    /// 头像探测失败：仅替换该记录的头像引用为占位图
    ///
    /// 集合加载完成后唯一允许的修改，身份、选择与分页不受影响。
    pub fn mark_avatar_broken(&mut self, user_id: &str) {
        if let LoadState::Loaded(users) = &mut self.load {
            if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
                user.use_placeholder_avatar();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_directory_core::PLACEHOLDER_AVATAR;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            username: format!("user{id}"),
            firstname: "Test".into(),
            lastname: id.into(),
            email: format!("user{id}@example.com"),
            avatar: format!("https://robohash.org/{id}.png"),
            role: "Engineer".into(),
            join_date: "01/01/2023".into(),
            description: "desc".into(),
        }
    }

    #[test]
    fn lifecycle_reaches_loaded() {
        let mut state = UsersState::new();
        assert!(state.is_loading());

        state.begin_loading();
        assert!(state.is_loading());
        assert!(state.users().is_empty());

        state.set_loaded(vec![user("1"), user("2")]);
        assert!(!state.is_loading());
        assert_eq!(state.len(), 2);
        assert!(state.error_message().is_none());
    }

    #[test]
    fn lifecycle_reaches_failed() {
        let mut state = UsersState::new();
        state.begin_loading();
        state.set_failed("Failed to fetch users.");

        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("Failed to fetch users."));
        assert!(state.users().is_empty());
    }

    #[test]
    fn broken_avatar_replaced_for_that_record_only() {
        let mut state = UsersState::new();
        state.set_loaded(vec![user("1"), user("2")]);

        state.mark_avatar_broken("1");

        assert_eq!(state.users()[0].avatar, PLACEHOLDER_AVATAR);
        assert_eq!(state.users()[1].avatar, "https://robohash.org/2.png");
        // 顺序与身份不变
        assert_eq!(state.users()[0].id, "1");
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut state = UsersState::new();
        state.set_loaded(vec![user("1")]);
        state.mark_avatar_broken("42");
        assert_eq!(state.users()[0].avatar, "https://robohash.org/1.png");
    }
}
