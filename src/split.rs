//! 账单分摊计算
//!
//! 纯函数：根据账单总额、你的花费以及付款人，得出好友余额的变化量

use crate::models::Money;

/// 谁付的账单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// 好友应承担的部分
pub fn friend_share(bill_total: Money, user_share: Money) -> Money {
    bill_total - user_share
}

/// 计算好友余额的变化量
///
/// 要求 `0 <= user_share <= bill_total`，调用方（分摊表单）负责保证。
/// 你付款时好友欠你他的那一份；好友付款时你欠好友你自己的那一份。
pub fn compute_split(bill_total: Money, user_share: Money, payer: Payer) -> Money {
    debug_assert!(user_share <= bill_total);
    match payer {
        Payer::User => friend_share(bill_total, user_share),
        Payer::Friend => -user_share,
    }
}
