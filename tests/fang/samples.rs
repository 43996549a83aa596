//! Golden-file tests over the bundled advisory sample.

use iocfang::{defang, refang, transform, Category, Direction};

use crate::common::{read_sample, test_data};

#[test]
fn advisory_defangs_to_golden_output() {
    let (Some(input), Some(expected)) = (
        read_sample(test_data::ADVISORY),
        read_sample(test_data::ADVISORY_DEFANGED),
    ) else {
        return;
    };
    assert_eq!(defang(&input), expected);
}

#[test]
fn advisory_golden_output_refangs_to_input() {
    let (Some(input), Some(defanged)) = (
        read_sample(test_data::ADVISORY),
        read_sample(test_data::ADVISORY_DEFANGED),
    ) else {
        return;
    };
    assert_eq!(refang(&defanged), input);
    assert_eq!(defang(&defanged), defanged);
}

#[test]
fn advisory_report_categories() {
    let Some(input) = read_sample(test_data::ADVISORY) else {
        return;
    };
    let report = transform(&input, Direction::Defang);
    let cats: Vec<Category> = report.edits.iter().map(|e| e.span.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Email,
            Category::Url,
            Category::Url,
            Category::Domain,
            Category::Ip,
            Category::Ip,
        ]
    );
    assert_eq!(report.changed(), 6);
}

#[test]
fn mixed_case_scheme_round_trips() {
    let text = "Visit HTTPS://Portal.Example.COM/Login now";
    let defanged = defang(text);
    assert_eq!(defanged, "Visit HXXPS://Portal[.]Example[.]COM/Login now");
    assert_eq!(refang(&defanged), text);
}

#[test]
fn refang_handles_partially_defanged_domain() {
    assert_eq!(refang("host sub.example[.]com up"), "host sub.example.com up");
    assert_eq!(refang("mail ops[@]corp[.]example"), "mail ops@corp.example");
}

#[test]
fn ip_without_range_validation() {
    assert_eq!(defang("bogus 999.999.999.999"), "bogus 999[.]999[.]999[.]999");
}

#[test]
fn report_serializes_to_json() {
    let report = transform("x 1.2.3.4", Direction::Defang);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["direction"], "defang");
    assert_eq!(json["output"], "x 1[.]2[.]3[.]4");
    assert_eq!(json["edits"][0]["span"]["category"], "ip");
    assert_eq!(json["edits"][0]["span"]["start"], 2);
    assert_eq!(json["edits"][0]["replacement"], "1[.]2[.]3[.]4");
}
