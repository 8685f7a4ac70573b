use std::path::Path;

// ---------------------------------------------------------------------------
// Per-format configuration
// ---------------------------------------------------------------------------

/// How the drop-status set matches a row's status field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMatch {
    Exact,
    Substring,
}

/// Where the output category comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategorySource {
    /// A dedicated source column (Alipay has 交易分类).
    Column(&'static str),
    /// The direction label itself (WeChat has no category column).
    Direction,
}

/// Source column names, looked up after header normalization.
#[derive(Debug, Clone, Copy)]
pub struct SourceColumns {
    pub time: &'static str,
    pub direction: &'static str,
    pub amount: &'static str,
    pub instrument: &'static str,
    pub status: &'static str,
    pub counterparty: &'static str,
    pub description: &'static str,
    pub reference: &'static str,
}

/// Everything that differs between the two bill exports, as one immutable
/// table. The pipeline itself is format-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct FormatProfile {
    /// Preamble rows before the header row.
    pub skip_rows: usize,
    pub columns: SourceColumns,
    pub status_match: StatusMatch,
    pub drop_status: &'static [&'static str],
    pub drop_direction: &'static [&'static str],
    pub direction_signs: &'static [(&'static str, i64)],
    pub account_map: &'static [(&'static str, &'static str)],
    pub default_account: &'static str,
    pub category: CategorySource,
}

impl FormatProfile {
    pub fn direction_sign(&self, direction: &str) -> Option<i64> {
        self.direction_signs
            .iter()
            .find(|(label, _)| *label == direction)
            .map(|(_, sign)| *sign)
    }
}

#[cfg(feature = "wechat")]
pub const WECHAT_PROFILE: FormatProfile = FormatProfile {
    skip_rows: 16,
    columns: SourceColumns {
        time: "交易时间",
        direction: "收/支",
        // 金额(元) with the parens stripped by the loader
        amount: "金额元",
        instrument: "支付方式",
        status: "当前状态",
        counterparty: "交易对方",
        description: "商品",
        reference: "交易单号",
    },
    status_match: StatusMatch::Substring,
    drop_status: &["已退款", "已全额退款", "退款成功"],
    drop_direction: &["/"],
    direction_signs: &[("支出", 1), ("收入", -1), ("/", 0)],
    account_map: &[
        ("零钱", "微信零钱"),
        ("零钱通", "微信零钱通"),
        ("招商银行储蓄卡(7699)", "招商银行储蓄卡(7699)"),
        ("农业银行储蓄卡(4976)", "农业银行储蓄卡(4976)"),
        ("", "微信零钱"),
    ],
    default_account: "微信零钱",
    category: CategorySource::Direction,
};

pub const ALIPAY_PROFILE: FormatProfile = FormatProfile {
    skip_rows: 24,
    columns: SourceColumns {
        time: "交易时间",
        direction: "收/支",
        amount: "金额",
        instrument: "收/付款方式",
        status: "交易状态",
        counterparty: "交易对方",
        description: "商品说明",
        reference: "交易订单号",
    },
    status_match: StatusMatch::Exact,
    drop_status: &["交易关闭", "退款成功"],
    drop_direction: &["不计收支"],
    direction_signs: &[("支出", 1), ("收入", -1), ("不计收支", 0)],
    account_map: &[
        ("余额宝", "余额宝"),
        ("余额宝&碰一下立减", "余额宝"),
        ("工商银行储蓄卡(3445)", "工商银行储蓄卡(3445)"),
        ("工商银行储蓄卡(3445)&余额宝", "工商银行储蓄卡(3445)"),
        ("工商银行储蓄卡(3445)&碰一下立减", "工商银行储蓄卡(3445)"),
        ("招商银行储蓄卡(7699)", "招商银行储蓄卡(7699)"),
        ("农业银行储蓄卡(4976)", "农业银行储蓄卡(4976)"),
        ("账户余额", "余额宝"),
        ("", "余额宝"),
    ],
    default_account: "余额宝",
    category: CategorySource::Column("交易分类"),
};

// ---------------------------------------------------------------------------
// Format kinds — enum dispatch instead of trait objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatKind {
    #[cfg(feature = "wechat")]
    WechatPay,
    Alipay,
}

impl FormatKind {
    pub fn key(&self) -> &'static str {
        match self {
            #[cfg(feature = "wechat")]
            Self::WechatPay => "wechat",
            Self::Alipay => "alipay",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "wechat")]
            Self::WechatPay => "WeChat Pay bill (XLSX)",
            Self::Alipay => "Alipay transaction export (CSV)",
        }
    }

    pub fn profile(&self) -> &'static FormatProfile {
        match self {
            #[cfg(feature = "wechat")]
            Self::WechatPay => &WECHAT_PROFILE,
            Self::Alipay => &ALIPAY_PROFILE,
        }
    }

    pub fn detect(&self, file_path: &Path) -> bool {
        let ext = file_path
            .extension()
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match self {
            #[cfg(feature = "wechat")]
            Self::WechatPay => ext == "xlsx" || ext == "xls",
            Self::Alipay => ext == "csv" || ext == "txt",
        }
    }
}

pub const ALL_FORMATS: &[FormatKind] = &[
    #[cfg(feature = "wechat")]
    FormatKind::WechatPay,
    FormatKind::Alipay,
];

pub fn get_by_key(key: &str) -> Option<FormatKind> {
    ALL_FORMATS.iter().find(|f| f.key() == key).copied()
}

pub fn get_for_file(file_path: &Path) -> Option<FormatKind> {
    ALL_FORMATS.iter().find(|f| f.detect(file_path)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_key() {
        assert_eq!(get_by_key("alipay"), Some(FormatKind::Alipay));
        assert_eq!(get_by_key("venmo"), None);
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            get_for_file(Path::new("支付宝交易明细.csv")),
            Some(FormatKind::Alipay)
        );
        assert_eq!(get_for_file(Path::new("bill.pdf")), None);
    }

    #[cfg(feature = "wechat")]
    #[test]
    fn test_detect_xlsx_is_wechat() {
        assert_eq!(
            get_for_file(Path::new("微信支付账单.xlsx")),
            Some(FormatKind::WechatPay)
        );
        assert_eq!(
            get_for_file(Path::new("BILL.XLSX")),
            Some(FormatKind::WechatPay)
        );
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(ALIPAY_PROFILE.direction_sign("支出"), Some(1));
        assert_eq!(ALIPAY_PROFILE.direction_sign("收入"), Some(-1));
        assert_eq!(ALIPAY_PROFILE.direction_sign("不计收支"), Some(0));
        assert_eq!(ALIPAY_PROFILE.direction_sign("其他"), None);
    }
}
