//! 表单状态
//!
//! 添加好友表单与分摊账单表单，负责逐键输入的校验与限制

use crate::error::EntryError;
use crate::models::Money;
use crate::split::{Payer, compute_split, friend_share};

// ============ 添加好友表单 ============

/// 添加好友表单的输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    pub field: AddField,
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: &str) -> Self {
        Self {
            name: String::new(),
            image: default_image.to_string(),
            field: AddField::Name,
            default_image: default_image.to_string(),
        }
    }

    /// 恢复默认值
    pub fn reset(&mut self) {
        *self = Self::new(&self.default_image);
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            AddField::Name => AddField::Image,
            AddField::Image => AddField::Name,
        };
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            AddField::Name => &mut self.name,
            AddField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.active_mut().push(ch);
        true
    }

    pub fn pop_char(&mut self) {
        self.active_mut().pop();
    }
}

// ============ 分摊账单表单 ============

/// 分摊表单的输入字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    UserShare,
    Payer,
}

impl SplitField {
    pub fn next(self) -> Self {
        match self {
            SplitField::Bill => SplitField::UserShare,
            SplitField::UserShare => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }
}

/// 分摊表单，保证你的花费不超过账单金额
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitForm {
    bill: String,
    user_share: String,
    pub payer: Payer,
    pub field: SplitField,
}

impl SplitForm {
    pub fn bill_text(&self) -> &str {
        &self.bill
    }

    pub fn user_share_text(&self) -> &str {
        &self.user_share
    }

    pub fn bill(&self) -> Option<Money> {
        Money::parse_entry(&self.bill)
    }

    pub fn user_share(&self) -> Option<Money> {
        Money::parse_entry(&self.user_share)
    }

    /// 好友的花费（只读字段），账单金额为空时不显示
    pub fn friend_share(&self) -> Option<Money> {
        self.bill()
            .map(|bill| friend_share(bill, self.user_share().unwrap_or(Money::ZERO)))
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    /// 修改账单金额；若低于你的花费则同时压低你的花费
    pub fn set_bill(&mut self, text: &str) -> bool {
        if !Money::is_entry_text(text) {
            return false;
        }
        self.bill = text.to_string();
        if let Some(share) = self.user_share() {
            match self.bill() {
                Some(bill) if share > bill => self.user_share = bill.to_entry_text(),
                None if !share.is_zero() => self.user_share.clear(),
                _ => {}
            }
        }
        true
    }

    /// 修改你的花费；超过账单金额时保留原值
    pub fn set_user_share(&mut self, text: &str) -> bool {
        if !Money::is_entry_text(text) {
            return false;
        }
        if let Some(share) = Money::parse_entry(text) {
            if share > self.bill().unwrap_or(Money::ZERO) {
                return false;
            }
        }
        self.user_share = text.to_string();
        true
    }

    /// 向当前字段输入一个字符，返回是否被接受
    pub fn push_char(&mut self, ch: char) -> bool {
        match self.field {
            SplitField::Bill => {
                let candidate = format!("{}{ch}", self.bill);
                self.set_bill(&candidate)
            }
            SplitField::UserShare => {
                let candidate = format!("{}{ch}", self.user_share);
                self.set_user_share(&candidate)
            }
            SplitField::Payer => false,
        }
    }

    pub fn pop_char(&mut self) {
        match self.field {
            SplitField::Bill => {
                let mut candidate = self.bill.clone();
                candidate.pop();
                self.set_bill(&candidate);
            }
            SplitField::UserShare => {
                let mut candidate = self.user_share.clone();
                candidate.pop();
                self.set_user_share(&candidate);
            }
            SplitField::Payer => {}
        }
    }

    /// 计算余额变化量；金额未填写时拒绝提交
    pub fn delta(&self) -> Result<Money, EntryError> {
        let bill = self.bill().ok_or(EntryError::MissingBill)?;
        let share = self.user_share().ok_or(EntryError::MissingShare)?;
        Ok(compute_split(bill, share, self.payer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut SplitForm, field: SplitField, text: &str) {
        form.field = field;
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn test_add_form_fields() {
        let mut form = AddFriendForm::new("https://i.pravatar.cc/48");
        for ch in "Dana".chars() {
            form.push_char(ch);
        }
        assert_eq!(form.name, "Dana");

        form.toggle_field();
        form.pop_char();
        assert_eq!(form.image, "https://i.pravatar.cc/4");

        form.reset();
        assert_eq!(form.name, "");
        assert_eq!(form.image, "https://i.pravatar.cc/48");
        assert_eq!(form.field, AddField::Name);
    }

    #[test]
    fn test_add_form_ignores_control_chars() {
        let mut form = AddFriendForm::new("img");
        assert!(!form.push_char('\t'));
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_split_delta() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "100");
        type_into(&mut form, SplitField::UserShare, "40");

        assert_eq!(form.friend_share(), Some(Money::new(60)));
        assert_eq!(form.delta(), Ok(Money::new(60)));

        form.toggle_payer();
        assert_eq!(form.delta(), Ok(Money::new(-40)));
    }

    #[test]
    fn test_split_requires_both_amounts() {
        let mut form = SplitForm::default();
        assert_eq!(form.delta(), Err(EntryError::MissingBill));

        type_into(&mut form, SplitField::Bill, "50");
        assert_eq!(form.delta(), Err(EntryError::MissingShare));
        assert_eq!(form.friend_share(), Some(Money::new(50)));
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "0");
        type_into(&mut form, SplitField::UserShare, "0");
        assert_eq!(form.delta(), Ok(Money::ZERO));
    }

    #[test]
    fn test_user_share_clamp_keeps_previous_value() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "100");
        type_into(&mut form, SplitField::UserShare, "40");

        assert!(!form.push_char('0'));
        assert_eq!(form.user_share_text(), "40");
        assert_eq!(form.user_share(), Some(Money::new(40)));
    }

    #[test]
    fn test_user_share_needs_bill_first() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::UserShare, "5");
        assert_eq!(form.user_share_text(), "");

        assert!(form.push_char('0'));
        assert_eq!(form.user_share(), Some(Money::ZERO));
    }

    #[test]
    fn test_lowering_bill_clamps_share() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "100");
        type_into(&mut form, SplitField::UserShare, "40");

        form.field = SplitField::Bill;
        form.pop_char();
        assert_eq!(form.bill(), Some(Money::new(10)));
        assert_eq!(form.user_share(), Some(Money::new(10)));
        assert_eq!(form.friend_share(), Some(Money::ZERO));
    }

    #[test]
    fn test_clearing_bill_clears_share() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "5");
        type_into(&mut form, SplitField::UserShare, "5");

        form.field = SplitField::Bill;
        form.pop_char();
        assert_eq!(form.bill(), None);
        assert_eq!(form.user_share_text(), "");
        assert_eq!(form.friend_share(), None);
    }

    #[test]
    fn test_oversized_bill_keeps_previous_text() {
        let mut form = SplitForm::default();
        type_into(&mut form, SplitField::Bill, "999999999999");
        type_into(&mut form, SplitField::UserShare, "30");

        form.field = SplitField::Bill;
        assert!(!form.push_char('0'));
        assert_eq!(form.bill_text(), "999999999999");
        assert_eq!(form.bill(), Some(Money::new(999_999_999_999)));
        assert_eq!(form.user_share(), Some(Money::new(30)));
        assert_eq!(form.delta(), Ok(Money::new(999_999_999_969)));
    }

    #[test]
    fn test_rejects_non_numeric_input() {
        let mut form = SplitForm::default();
        assert!(!form.push_char('-'));
        assert!(!form.push_char('x'));
        type_into(&mut form, SplitField::Bill, "12.345");
        assert_eq!(form.bill_text(), "12.34");
    }

    #[test]
    fn test_payer_field_takes_no_text() {
        let mut form = SplitForm::default();
        form.field = SplitField::Payer;
        assert!(!form.push_char('1'));
        form.next_field();
        assert_eq!(form.field, SplitField::Bill);
    }
}
