//! The literal résumé content.
//!
//! Everything the document says is compiled in here as static data. The
//! renderers in [`crate::sections`] own the geometry; this module owns the
//! words. Changing the CV means editing these tables, nothing else.

/// Horizontal placement of a skill entry. Column assignment is explicit per
/// item rather than derived from the item's position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub headline: &'static str,
    pub contact: &'static str,
    pub summary: [&'static str; 2],
}

pub struct Job {
    pub role: &'static str,
    pub employer: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    /// Extra vertical space inserted above this entry.
    pub gap_above: f64,
}

pub struct Degree {
    pub school: &'static str,
    pub location: &'static str,
    pub award: &'static str,
    pub period: &'static str,
}

pub struct Skill {
    pub title: &'static str,
    pub value: &'static str,
    pub column: Column,
}

pub struct Certification {
    pub issuer: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub links: &'static [&'static str],
}

pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
    pub links: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    first_name: "Francesco",
    last_name: "Colicino",
    headline: "DATA SCIENTIST",
    contact: "Tel: 3341133931  |  Email: colicino.francesco@gmail.com",
    summary: [
        "I have been working as a Data Scientist for over 4 years with special focus on time series analysis and",
        "forecasting. My daily tools are R and Python.",
    ],
};

pub const JOBS: [Job; 3] = [
    Job {
        role: "Data Scientist",
        employer: "FOORBAN",
        location: "Milan",
        period: "Dic 2026 -> Present",
        bullets: &["Softwares and Tools: Python, SQL"],
        gap_above: 0.0,
    },
    Job {
        role: "Data Scientist",
        employer: "COOP CONSORZIO NORD OVEST",
        location: "Milan",
        period: "Oct 2021 -> Nov 2025",
        bullets: &[
            "CRM Analysis, customer segmentation with marketing goals;",
            "A/B tests and inference on promos;",
            "Bayesian analysis with PyMC",
            "Forecast of churn customers through prediction model;",
            "Time series analysis and forecast on sales and stock data;",
            "Softwares and Tools: R, Python, SQL",
        ],
        gap_above: 0.0,
    },
    Job {
        role: "Data Scientist",
        employer: "BV-TECH",
        location: "Milan",
        period: "Nov 2020 -> Nov 2021",
        bullets: &[
            "Extraction and manipulation (ETL) of data in SAS;",
            "Data visualization through Microstrategy dashboards;",
            "Software and Tools: SAS, SQL, Microstrategy",
        ],
        gap_above: 10.0,
    },
];

pub const DEGREES: [Degree; 2] = [
    Degree {
        school: "University of Milano-Bicocca",
        location: "Milan",
        award: "MASTER'S DEGREE IN STATISTICAL SCIENCES 103/110",
        period: "Oct 2017 -> Mar 2020",
    },
    Degree {
        school: "University of Milano-Bicocca",
        location: "Milan",
        award: "BACHELOR'S DEGREE IN STATISTICAL SCIENCES 85/110",
        period: "Oct 2011 -> Mar 2017",
    },
];

pub const SKILLS: [Skill; 7] = [
    Skill {
        title: "Programming Languages",
        value: "PYTHON, R, SQL, BASH",
        column: Column::Left,
    },
    Skill {
        title: "Visualization Tools",
        value: "MICROSTRATEGY",
        column: Column::Right,
    },
    Skill {
        title: "Version Control",
        value: "GIT",
        column: Column::Left,
    },
    Skill {
        title: "Text Editors",
        value: "RSTUDIO, VISUAL STUDIO CODE",
        column: Column::Right,
    },
    Skill {
        title: "Operating System",
        value: "LINUX, WINDOWS",
        column: Column::Left,
    },
    Skill {
        title: "Cloud Provider",
        value: "AWS",
        column: Column::Right,
    },
    Skill {
        title: "DevOps",
        value: "DOCKER",
        column: Column::Left,
    },
];

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        issuer: "Hacker Rank",
        title: "SQL (BASIC) SQL (INTERMEDIATE)",
        year: "2024",
        links: &[
            "https://www.hackerrank.com/certificates/8e0767711de3",
            "https://www.hackerrank.com/certificates/9cedf64a161a",
        ],
    },
    Certification {
        issuer: "SAS",
        title: "SAS CERTIFIED SPECIALIST: BASE PROGRAMMING USING SAS 9.4",
        year: "2020",
        links: &["https://www.credly.com/badges/c94d7c74-2a21-41bb-8df6-fe2e605eea87/public_url"],
    },
];

pub const LANGUAGES: [Language; 2] = [
    Language {
        name: "Italiano",
        level: "MOTHER TONGUE",
        links: &[],
    },
    Language {
        name: "English",
        level: "B2",
        links: &["https://bestr.it/award/show/DMl8BEZ3QCeI0KKNu9YVxg"],
    },
];

pub const PRIVACY_NOTICE: [&str; 2] = [
    "I authorize the processing of my personal data contained in my curriculum vitae in accordance with Legislative",
    "Decree 196/2003 and EU Regulation 2016/679.",
];

/// Centered page line at the bottom of every page.
pub fn page_line(page_number: u32) -> String {
    format!("FRANCESCO COLICINO \u{b7} CURRICULUM VITAE \u{b7} {page_number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Regression guard for the two-column skills layout: odd 1-based
    /// positions sit in the left column, even positions in the right column.
    #[test]
    fn skills_alternate_columns_starting_left() {
        assert_eq!(SKILLS.len(), 7);
        for (i, skill) in SKILLS.iter().enumerate() {
            let expected = if (i + 1) % 2 == 0 {
                Column::Right
            } else {
                Column::Left
            };
            assert_eq!(
                skill.column, expected,
                "skill {} ({}) is in the wrong column",
                i + 1,
                skill.title
            );
        }
    }

    #[test]
    fn page_line_carries_the_page_number() {
        assert_eq!(page_line(1), "FRANCESCO COLICINO \u{b7} CURRICULUM VITAE \u{b7} 1");
        assert_eq!(page_line(2), "FRANCESCO COLICINO \u{b7} CURRICULUM VITAE \u{b7} 2");
    }

    #[test]
    fn every_certification_has_at_least_one_link() {
        for cert in &CERTIFICATIONS {
            assert!(!cert.links.is_empty(), "{} has no link", cert.issuer);
        }
    }
}
