/// One entry of the education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationRecord {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Rendered in this order, most recent first.
pub const EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        id: 1,
        degree: "Bachelor of Information Technology",
        institution: "AMA Computer College of Davao",
        period: "2022 - 2025",
        description: "Relevant coursework: Data Structures, Algorithms, Web Development, \
                      Database Systems, Software Engineering, Artificial Intelligence",
    },
    EducationRecord {
        id: 2,
        degree: "Science, Technology, Engineering, and Mathematics",
        institution: "Calinan National High School",
        period: "2016 - 2022",
        description: "Graduated with honors. Participated in science fairs and coding competitions.",
    },
];
