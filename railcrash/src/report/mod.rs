//! Collision report.
//!
//! The report is the deduplicated, time-ordered list of collisions handed to
//! the presentation layer. Numbering is 1-based and applied when the report
//! is rendered; it is not stored on the records.

mod order;

use std::fmt;

use serde::Serialize;

use crate::collision::Collision;

pub use order::{dedup, sort_by_time};

/// Time-ordered collisions of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    collisions: Vec<Collision>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    collisions: &'a [Collision],
}

impl Report {
    /// Build a report, ordering the collisions by time.
    pub fn new(collisions: Vec<Collision>) -> Self {
        Self {
            collisions: sort_by_time(collisions),
        }
    }

    /// Number of collisions.
    pub fn len(&self) -> usize {
        self.collisions.len()
    }

    /// Returns true if no collision was found.
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Collisions, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &Collision> + '_ {
        self.collisions.iter()
    }

    /// Collisions, earliest first.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// One-line summary printed before the list.
    pub fn summary_line(&self) -> String {
        match self.len() {
            1 => "1 crash detected".to_string(),
            n => format!("{n} crashes detected"),
        }
    }

    /// Render as a JSON document with a count and the tagged records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonReport {
            count: self.len(),
            collisions: &self.collisions,
        })
    }
}

/// Write one report line for the collision numbered `index` (1-based).
fn write_line(f: &mut fmt::Formatter<'_>, index: usize, collision: &Collision) -> fmt::Result {
    match collision {
        Collision::Branch(c) => write!(
            f,
            "Crash {index}: stations: {}<->{} engines: {}, {} time: {}",
            c.stations.0, c.stations.1, c.engines.0, c.engines.1, c.time
        ),
        Collision::Station(c) => {
            write!(f, "Crash {index}: time: {} station: {} engines: ", c.time, c.station)?;
            for (i, engine) in c.engines.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{engine}")?;
            }
            Ok(())
        }
    }
}

/// One line per collision, numbered from 1.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, collision) in self.collisions.iter().enumerate() {
            write_line(f, i + 1, collision)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{BranchCrash, StationCrash};
    use crate::domain::{EngineId, SimTime, StationId};

    fn s(id: u32) -> StationId {
        StationId::new(id)
    }

    fn e(id: u32) -> EngineId {
        EngineId::new(id)
    }

    fn sample() -> Report {
        let half = SimTime::midpoint(SimTime::from_units(1), SimTime::from_units(4));
        Report::new(vec![
            StationCrash {
                station: s(3),
                time: SimTime::from_units(4),
                engines: vec![e(0), e(2), e(5)],
            }
            .into(),
            BranchCrash::new(s(2), s(1), e(1), e(0), half).into(),
        ])
    }

    #[test]
    fn empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.summary_line(), "0 crashes detected");
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn new_sorts_by_time() {
        let report = sample();
        let times: Vec<_> = report.iter().map(|c| c.time().to_string()).collect();
        assert_eq!(times, vec!["2.5", "4.0"]);
    }

    #[test]
    fn renders_numbered_lines() {
        let report = sample();
        assert_eq!(report.summary_line(), "2 crashes detected");
        assert_eq!(
            report.to_string(),
            "Crash 1: stations: 1<->2 engines: 0, 1 time: 2.5\n\
             Crash 2: time: 4.0 station: 3 engines: 0, 2, 5\n"
        );
    }

    #[test]
    fn summary_singular() {
        let report = Report::new(vec![
            BranchCrash::new(s(0), s(1), e(0), e(1), SimTime::from_units(1)).into(),
        ]);
        assert_eq!(report.summary_line(), "1 crash detected");
    }

    #[test]
    fn json_rendering() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["count"], 2);
        assert_eq!(json["collisions"][0]["kind"], "branch");
        assert_eq!(json["collisions"][0]["time"], 2.5);
        assert_eq!(json["collisions"][1]["kind"], "station");
        assert_eq!(json["collisions"][1]["engines"], serde_json::json!([0, 2, 5]));
    }
}
