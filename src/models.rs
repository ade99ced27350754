use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EntryError;

/// 金额输入允许的最大小数位
pub const MAX_FRACTION_DIGITS: usize = 2;

/// 金额输入允许的最大整数位，保证解析和余额累加都不会溢出
pub const MAX_WHOLE_DIGITS: usize = 12;

/// 带符号金额
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// 溢出时返回 None
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// 检查输入框中的文本是否合法（可以是尚未输完的数字，如 "12."）
    pub fn is_entry_text(text: &str) -> bool {
        let mut parts = text.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        whole.len() <= MAX_WHOLE_DIGITS
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.is_none_or(|f| {
                f.len() <= MAX_FRACTION_DIGITS && f.chars().all(|c| c.is_ascii_digit())
            })
    }

    /// 解析输入框文本，空文本或只有小数点时返回 None
    pub fn parse_entry(text: &str) -> Option<Self> {
        if !Self::is_entry_text(text) || !text.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let normalized = text.trim_end_matches('.');
        let normalized = if normalized.starts_with('.') {
            format!("0{normalized}")
        } else {
            normalized.to_string()
        };
        Decimal::from_str(&normalized).ok().map(Self)
    }

    /// 转回输入框文本
    pub fn to_entry_text(self) -> String {
        self.0.normalize().to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// 好友 ID，仅作为查找键使用
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FriendId(Uuid);

impl FriendId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 好友记录，创建后只有余额可变
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    id: FriendId,
    name: String,
    image: String,
    balance: Money,
}

impl Friend {
    fn new(name: String, image: String, balance: Money) -> Self {
        Self {
            id: FriendId::generate(),
            name,
            image,
            balance,
        }
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn status(&self) -> BalanceStatus {
        classify(self.balance)
    }
}

/// 余额状态（供视图层使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Even,
    FriendOwes(Money), // 好友欠你
    UserOwes(Money),   // 你欠好友
}

/// 按余额符号分类，金额取绝对值
pub fn classify(balance: Money) -> BalanceStatus {
    if balance.is_zero() {
        BalanceStatus::Even
    } else if balance.is_negative() {
        BalanceStatus::UserOwes(balance.abs())
    } else {
        BalanceStatus::FriendOwes(balance)
    }
}

/// 好友列表：保持插入顺序，只增不减
#[derive(Debug, Clone, Default)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置的示例好友
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        roster.push_seed("Clark", "https://i.pravatar.cc/48?u=118836", Money::new(-7));
        roster.push_seed("Sarah", "https://i.pravatar.cc/48?u=933372", Money::new(20));
        roster.push_seed("Anthony", "https://i.pravatar.cc/48?u=499476", Money::ZERO);
        roster
    }

    /// 直接追加一条带初始余额的记录（用于种子数据）
    pub fn push_seed(&mut self, name: &str, image: &str, balance: Money) -> FriendId {
        let friend = Friend::new(name.to_string(), image.to_string(), balance);
        let id = friend.id;
        self.friends.push(friend);
        id
    }

    /// 添加新好友，名字或头像为空时不做任何修改
    pub fn add_friend(&mut self, name: &str, image: &str) -> Result<FriendId, EntryError> {
        let name = name.trim();
        let image = image.trim();
        if name.is_empty() {
            return Err(EntryError::MissingName);
        }
        if image.is_empty() {
            return Err(EntryError::MissingImage);
        }
        Ok(self.push_seed(name, image, Money::ZERO))
    }

    /// 调整余额，返回新余额；失败时余额不变
    pub fn apply_delta(&mut self, id: FriendId, delta: Money) -> Result<Money, EntryError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(EntryError::UnknownFriend)?;
        friend.balance = friend
            .balance
            .checked_add(delta)
            .ok_or(EntryError::AmountTooLarge)?;
        Ok(friend.balance)
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn position(&self, id: FriendId) -> Option<usize> {
        self.friends.iter().position(|f| f.id == id)
    }

    pub fn contains(&self, id: FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
