#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    /// Path under the site root.
    pub image: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Responsive Web Design",
        image: "/certificates/responsive-web-design.png",
    },
    Certificate {
        title: "JavaScript Algorithms and Data Structures",
        image: "/certificates/javascript-algorithms.png",
    },
    Certificate {
        title: "Front End Development Libraries",
        image: "/certificates/front-end-libraries.png",
    },
];
