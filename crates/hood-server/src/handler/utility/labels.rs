//! Localized count labels.
//!
//! Arabic distinguishes one, two, three to ten, and eleven or more, so each
//! label has four Arabic forms.

use hood_postgres::types::Locale;

/// Label for an estimated reading time in minutes.
pub fn reading_time_label(locale: Locale, minutes: u32) -> String {
    match locale {
        Locale::Ar => match minutes {
            1 => "دقيقة واحدة للقراءة".to_owned(),
            2 => "دقيقتان للقراءة".to_owned(),
            3..=10 => format!("{minutes} دقائق للقراءة"),
            _ => format!("{minutes} دقيقة للقراءة"),
        },
        Locale::En => match minutes {
            1 => "One Minute to Read".to_owned(),
            _ => format!("{minutes} Minutes to Read"),
        },
    }
}

/// Label for an article view count.
pub fn views_label(locale: Locale, views: i32) -> String {
    match locale {
        Locale::Ar => match views {
            0 => "ﻻ مشاهدات".to_owned(),
            1 => "مشاهدة واحدة".to_owned(),
            2 => "مشاهدتان".to_owned(),
            3..=10 => format!("{views} مشاهدات"),
            _ => format!("{views} مشاهدة"),
        },
        Locale::En => match views {
            0 => "No Views".to_owned(),
            1 => "1 View".to_owned(),
            _ => format!("{views} Views"),
        },
    }
}

/// Label for the number of open positions of a job posting.
pub fn opportunities_label(locale: Locale, opportunities: i32) -> String {
    match locale {
        Locale::Ar => match opportunities {
            1 => "فرصة واحدة".to_owned(),
            2 => "فرصتان".to_owned(),
            3..=10 => format!("{opportunities} فرص"),
            _ => format!("{opportunities} فرصة"),
        },
        Locale::En => match opportunities {
            1 => "One opportunity".to_owned(),
            _ => format!("{opportunities} opportunities"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time() {
        assert_eq!(reading_time_label(Locale::Ar, 1), "دقيقة واحدة للقراءة");
        assert_eq!(reading_time_label(Locale::Ar, 2), "دقيقتان للقراءة");
        assert_eq!(reading_time_label(Locale::Ar, 7), "7 دقائق للقراءة");
        assert_eq!(reading_time_label(Locale::Ar, 11), "11 دقيقة للقراءة");
        assert_eq!(reading_time_label(Locale::En, 1), "One Minute to Read");
        assert_eq!(reading_time_label(Locale::En, 4), "4 Minutes to Read");
    }

    #[test]
    fn views() {
        assert_eq!(views_label(Locale::Ar, 0), "ﻻ مشاهدات");
        assert_eq!(views_label(Locale::Ar, 2), "مشاهدتان");
        assert_eq!(views_label(Locale::Ar, 10), "10 مشاهدات");
        assert_eq!(views_label(Locale::Ar, 150), "150 مشاهدة");
        assert_eq!(views_label(Locale::En, 0), "No Views");
        assert_eq!(views_label(Locale::En, 1), "1 View");
        assert_eq!(views_label(Locale::En, 42), "42 Views");
    }

    #[test]
    fn opportunities() {
        assert_eq!(opportunities_label(Locale::Ar, 1), "فرصة واحدة");
        assert_eq!(opportunities_label(Locale::Ar, 2), "فرصتان");
        assert_eq!(opportunities_label(Locale::Ar, 3), "3 فرص");
        assert_eq!(opportunities_label(Locale::Ar, 12), "12 فرصة");
        assert_eq!(opportunities_label(Locale::En, 1), "One opportunity");
        assert_eq!(opportunities_label(Locale::En, 5), "5 opportunities");
    }
}
