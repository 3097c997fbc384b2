use chart_axis::api::{FormatContext, TimeLabelConfig, format_time_ticks};
use chart_axis::core::Granularity;
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid timestamp")
}

fn texts(values: &[NaiveDateTime], granularity: Granularity) -> Vec<(String, Option<String>)> {
    format_time_ticks(values, granularity, &TimeLabelConfig::default())
        .into_iter()
        .map(|label| (label.text, label.secondary.map(|secondary| secondary.text)))
        .collect()
}

#[test]
fn months_show_the_year_only_when_it_changes() {
    let values = [
        at(2020, 11, 1, 0, 0),
        at(2020, 12, 1, 0, 0),
        at(2021, 1, 1, 0, 0),
        at(2021, 2, 1, 0, 0),
    ];
    assert_eq!(
        texts(&values, Granularity::Months),
        vec![
            ("Nov".to_owned(), Some("2020".to_owned())),
            ("Dec".to_owned(), None),
            ("Jan".to_owned(), Some("2021".to_owned())),
            ("Feb".to_owned(), None),
        ]
    );
}

#[test]
fn days_show_the_month_on_change() {
    let values = [
        at(2020, 1, 30, 0, 0),
        at(2020, 1, 31, 0, 0),
        at(2020, 2, 1, 0, 0),
        at(2020, 2, 2, 0, 0),
    ];
    let labels = texts(&values, Granularity::Days);
    let primary: Vec<&str> = labels.iter().map(|(text, _)| text.as_str()).collect();
    assert_eq!(primary, vec!["Jan 30", "31", "Feb 1", "2"]);
    assert_eq!(labels[0].1.as_deref(), Some("2020"));
    assert!(labels[1..].iter().all(|(_, secondary)| secondary.is_none()));
}

#[test]
fn weeks_format_like_days() {
    let values = [at(2019, 12, 29, 0, 0), at(2020, 1, 5, 0, 0), at(2020, 1, 12, 0, 0)];
    let labels = texts(&values, Granularity::Weeks);
    assert_eq!(labels[0], ("Dec 29".to_owned(), Some("2019".to_owned())));
    assert_eq!(labels[1], ("Jan 5".to_owned(), Some("2020".to_owned())));
    assert_eq!(labels[2], ("12".to_owned(), None));
}

#[test]
fn hours_use_twelve_hour_clock_with_date_on_change() {
    let values = [at(2020, 3, 9, 22, 0), at(2020, 3, 10, 0, 0), at(2020, 3, 10, 2, 30)];
    assert_eq!(
        texts(&values, Granularity::Hours),
        vec![
            ("10 p.m.".to_owned(), Some("Mar 9".to_owned())),
            ("12 a.m.".to_owned(), Some("Mar 10".to_owned())),
            ("2:30 a.m.".to_owned(), None),
        ]
    );
}

#[test]
fn years_and_minutes_have_single_lines() {
    let years = texts(&[at(2019, 1, 1, 0, 0), at(2020, 1, 1, 0, 0)], Granularity::Years);
    assert_eq!(years, vec![("2019".to_owned(), None), ("2020".to_owned(), None)]);

    let minutes = texts(&[at(2020, 1, 1, 10, 5)], Granularity::Minutes);
    assert_eq!(minutes[0].1, None);
    assert!(minutes[0].0.contains("10:05"));
}

#[test]
fn secondary_line_sits_below_the_primary() {
    let config = TimeLabelConfig {
        dy_em: 0.5,
        line_height_em: 1.2,
        ..TimeLabelConfig::default()
    };
    let labels = format_time_ticks(&[at(2020, 1, 1, 0, 0)], Granularity::Months, &config);
    let secondary = labels[0].secondary.as_ref().expect("year on first tick");
    assert!((secondary.dy_em - 1.7).abs() < 1e-12);
}

#[test]
fn formatting_is_repeatable_from_a_fresh_context() {
    let values = [at(2020, 6, 1, 0, 0), at(2020, 7, 1, 0, 0), at(2021, 1, 1, 0, 0)];
    let config = TimeLabelConfig::default();
    let first = format_time_ticks(&values, Granularity::Months, &config);
    let second = format_time_ticks(&values, Granularity::Months, &config);
    assert_eq!(first, second);

    let (context, label) = FormatContext::default().advance(values[0], Granularity::Months, &config);
    assert_eq!(label, first[0]);
    assert_eq!(context, FormatContext::after(values[0]));
    assert!(context.repeats(at(2020, 6, 15, 0, 0), Granularity::Months));
    assert!(!context.repeats(values[1], Granularity::Months));
}

#[test]
fn custom_month_names_are_used() {
    let mut config = TimeLabelConfig::default();
    config.month_abbreviations[0] = "janv.".to_owned();
    let labels = format_time_ticks(&[at(2020, 1, 1, 0, 0)], Granularity::Months, &config);
    assert_eq!(labels[0].text, "janv.");
}
