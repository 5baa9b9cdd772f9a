use std::fmt;

use super::BookId;

/// 利用者への通知内容
///
/// 通知サービスに渡す文言はここで一元管理する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingNotice {
    /// 利用者のアカウントが無効
    AccountNotActive,
    /// 書籍を貸し出した
    Borrowed(BookId),
    /// 書籍が返却された
    Returned(BookId),
}

impl fmt::Display for LendingNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LendingNotice::AccountNotActive => f.write_str("Your account is not active."),
            LendingNotice::Borrowed(book_id) => {
                write!(f, "You have borrowed the book: {}", book_id)
            }
            LendingNotice::Returned(book_id) => {
                write!(f, "You have returned the book: {}", book_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        assert_eq!(
            LendingNotice::AccountNotActive.to_string(),
            "Your account is not active."
        );
        assert_eq!(
            LendingNotice::Borrowed(BookId::from("book01")).to_string(),
            "You have borrowed the book: book01"
        );
        assert_eq!(
            LendingNotice::Returned(BookId::from("book01")).to_string(),
            "You have returned the book: book01"
        );
    }
}
