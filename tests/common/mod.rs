#![allow(dead_code)]

use launchboard::dataset::{Dataset, Outcome, Record};
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

/// (siteA, 500, success, v1), (siteA, 3000, fail, v1),
/// (siteB, 8000, success, v2), (siteB, 9000, fail, v2)
pub fn scenario_records() -> Vec<Record> {
    vec![
        Record::new("siteA", 500.0, Outcome::Success, "v1"),
        Record::new("siteA", 3000.0, Outcome::Failure, "v1"),
        Record::new("siteB", 8000.0, Outcome::Success, "v2"),
        Record::new("siteB", 9000.0, Outcome::Failure, "v2"),
    ]
}

pub fn scenario_dataset() -> Dataset {
    Dataset::from_records(scenario_records()).unwrap()
}

pub fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

/// A small file in the source dashboard's column order.
pub fn launch_csv() -> NamedTempFile {
    write_csv(&[
        HEADER,
        "1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0",
        "2,CCAFS LC-40,0,0,F9 v1.0  B0004,v1.0",
        "3,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0",
        "4,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1",
        "5,CCAFS LC-40,1,3170,F9 v1.1,v1.1",
        "6,KSC LC-39A,1,2490,F9 FT B1031.1,FT",
        "7,KSC LC-39A,1,5300,F9 FT B1032.1,FT",
        "8,VAFB SLC-4E,1,9600,F9 FT B1036.1,FT",
        "9,CCAFS SLC-40,1,5384,F9 B4 B1043.1,B4",
        "10,CCAFS SLC-40,0,6761,F9 B4 B1045.1,B4",
    ])
}
