//! Site chrome content: hero copy, instructor bio, resources, footer.

/// Course opening moment: 2026-09-07T09:00:00Z.
pub(super) const COURSE_START_TIMESTAMP: i64 = 1_788_771_600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub heading_lead: &'static str,
    pub heading_accent_a: &'static str,
    pub heading_accent_b: &'static str,
    pub heading_tail: &'static str,
    pub pitch: &'static str,
    pub cta: &'static str,
    pub highlights: &'static [&'static str],
}

pub static HERO: HeroContent = HeroContent {
    heading_lead: "Learn",
    heading_accent_a: "NoSQL",
    heading_accent_b: "MongoDB",
    heading_tail: "in 2 Days",
    pitch: "Master the fundamentals of NoSQL databases and become proficient in \
            MongoDB through hands-on projects, real-world scenarios, and expert \
            guidance.",
    cta: "Start Learning",
    highlights: &["2 Days Intensive", "Hands-on Projects", "Expert Instructor"],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    External,
    Download,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instructor {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub links: &'static [ContactLink],
}

pub static INSTRUCTOR: Instructor = Instructor {
    name: "Eng. Abdelrahman Hossam",
    role: "mid level Software Engineer & MERN Stack Developer",
    bio: "With over 10 years of experience in software development, Eng. \
          Abdelrahman Hossam has helped hundreds of companies migrate from \
          traditional SQL databases to MongoDB. He holds multiple MongoDB \
          certifications and has contributed to several open-source database \
          projects.",
    links: &[
        ContactLink {
            label: "Email",
            href: "mailto:geo.abdelrahmanem@gmail.com",
            kind: LinkKind::Email,
        },
        ContactLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/abdelrahman-hosam-6915b4229/",
            kind: LinkKind::External,
        },
        ContactLink {
            label: "GitHub",
            href: "https://github.com/AbdelrahmanH161",
            kind: LinkKind::External,
        },
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceCategory {
    pub name: &'static str,
    pub items: &'static [Resource],
}

pub static RESOURCES: [ResourceCategory; 2] = [
    ResourceCategory {
        name: "Course Materials",
        items: &[
            Resource {
                title: "Complete Course Slides",
                description: "All presentation slides in PDF format",
                kind: LinkKind::Download,
                href: "#",
            },
            Resource {
                title: "Exercise Files",
                description: "Hands-on exercises and sample datasets",
                kind: LinkKind::Download,
                href: "#",
            },
            Resource {
                title: "Code Examples",
                description: "All code examples from the course",
                kind: LinkKind::External,
                href: "https://github.com/mongodb/course-examples",
            },
        ],
    },
    ResourceCategory {
        name: "Official Documentation",
        items: &[
            Resource {
                title: "MongoDB Documentation",
                description: "Official MongoDB documentation and guides",
                kind: LinkKind::External,
                href: "https://docs.mongodb.com/",
            },
            Resource {
                title: "MongoDB University",
                description: "Free online courses from MongoDB",
                kind: LinkKind::External,
                href: "https://university.mongodb.com/",
            },
            Resource {
                title: "Community Forums",
                description: "Get help from the MongoDB community",
                kind: LinkKind::External,
                href: "https://community.mongodb.com/",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContact {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub static CONTACT: SiteContact = SiteContact {
    email: "geo.abdelrahmanem@gmail.com",
    phone: "+201115275161",
    location: "Aswan, Egypt",
};

/// Footer quick links: label + route path.
pub static QUICK_LINKS: [(&str, &str); 3] = [("Home", "/"), ("Day 1", "/day1"), ("Day 2", "/day2")];

pub static ABOUT_BLURB: &str =
    "A comprehensive 2-day intensive course designed to take you from MongoDB \
     beginner to confident practitioner with hands-on experience and real-world \
     projects.";

pub static COPYRIGHT: &str =
    "© 2025 MongoDB Course by Abdelrahman Hossam. All rights reserved.";
