//! 弹窗/对话框状态
//!
//! 选中记录与“弹窗可见”标志分开保存：关闭时先清可见标志、再清选中
//! 记录，避免出现“弹窗打开但内容为空”的一帧。

use user_directory_core::User;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 用户详情（携带被查看记录的完整快照）
    UserDetail { user: User },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 弹窗是否可见
    pub visible: bool,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有可见弹窗
    pub fn is_open(&self) -> bool {
        self.visible && self.active.is_some()
    }

    /// 显示用户详情弹窗；已有选中记录时直接替换
    pub fn show_user_detail(&mut self, user: User) {
        self.active = Some(Modal::UserDetail { user });
        self.visible = true;
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
        self.visible = true;
    }

    /// 关闭弹窗：先隐藏，再清空选中记录
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.active = None;
    }

    /// 当前被查看的用户
    pub fn selected_user(&self) -> Option<&User> {
        match &self.active {
            Some(Modal::UserDetail { user }) => Some(user),
            _ => None,
        }
    }

    /// 被查看用户头像探测失败时同步替换详情快照中的头像
    pub fn mark_avatar_broken(&mut self, user_id: &str) {
        if let Some(Modal::UserDetail { user }) = &mut self.active {
            if user.id == user_id {
                user.use_placeholder_avatar();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_directory_core::PLACEHOLDER_AVATAR;

    fn john() -> User {
        User {
            id: "1".into(),
            username: "jdoe".into(),
            firstname: "John".into(),
            lastname: "Doe".into(),
            email: "jdoe@example.com".into(),
            avatar: "https://robohash.org/jdoe.png".into(),
            role: "Engineer".into(),
            join_date: "01/01/2023".into(),
            description: "A skilled engineer.".into(),
        }
    }

    #[test]
    fn select_then_dismiss_returns_to_none() {
        let mut modal = ModalState::new();
        assert!(!modal.is_open());

        modal.show_user_detail(john());
        assert!(modal.is_open());
        assert_eq!(modal.selected_user().map(|u| u.full_name()).as_deref(), Some("John Doe"));

        modal.dismiss();
        assert!(!modal.is_open());
        assert!(!modal.visible);
        assert!(modal.active.is_none());
        assert!(modal.selected_user().is_none());
    }

    #[test]
    fn selecting_twice_replaces_the_record() {
        let mut modal = ModalState::new();
        modal.show_user_detail(john());

        let mut jane = john();
        jane.id = "2".into();
        jane.firstname = "Jane".into();
        modal.show_user_detail(jane);

        assert_eq!(modal.selected_user().map(|u| u.full_name()).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn avatar_repair_targets_matching_id_only() {
        let mut modal = ModalState::new();
        modal.show_user_detail(john());

        modal.mark_avatar_broken("42");
        assert_eq!(modal.selected_user().map(|u| u.avatar.as_str()), Some("https://robohash.org/jdoe.png"));

        modal.mark_avatar_broken("1");
        assert_eq!(modal.selected_user().map(|u| u.avatar.as_str()), Some(PLACEHOLDER_AVATAR));
    }

    #[test]
    fn help_modal_has_no_selected_user() {
        let mut modal = ModalState::new();
        modal.show_help();
        assert!(modal.is_open());
        assert!(modal.selected_user().is_none());
    }
}
