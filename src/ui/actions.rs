//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveCursorUp,
    MoveCursorDown,

    // 好友列表
    SelectFriend, // 选中/取消光标所在的好友
    ToggleAddForm,

    // 分摊表单
    TogglePayer,
    CloseSplit,

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    NextField,   // Tab
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
