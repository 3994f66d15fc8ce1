use crate::model::{Day, DaySchedule, ScheduleEntry, SessionKind};

/// The home-page schedule accordion data, keyed by day tab.
pub(super) static OVERVIEW: [DaySchedule; 2] = [
    DaySchedule {
        day: Day::One,
        title: "Day 1: NoSQL Fundamentals & MongoDB Basics",
        entries: &[
            ScheduleEntry {
                time: "9:00 AM - 10:30 AM",
                title: "Introduction to NoSQL",
                kind: SessionKind::Theory,
                topics: &[
                    "What is NoSQL and why use it?",
                    "NoSQL vs SQL databases",
                    "Types of NoSQL databases",
                    "CAP theorem and ACID properties",
                ],
            },
            ScheduleEntry {
                time: "10:30 AM - 11:00 AM",
                title: "NoSQL Types & CAP Theorem",
                kind: SessionKind::Theory,
                topics: &[
                    "Key-Value databases (Redis, DynamoDB)",
                    "Document databases (MongoDB, CouchDB)",
                    "Column-family databases (Cassandra, HBase)",
                    "Graph databases (Neo4j, ArangoDB)",
                    "CAP Theorem explained",
                ],
            },
            ScheduleEntry {
                time: "11:00 AM - 11:30 AM",
                title: "MongoDB Installation & Setup",
                kind: SessionKind::HandsOn,
                topics: &[
                    "Installing MongoDB Community Server",
                    "MongoDB Compass setup",
                    "Basic MongoDB shell commands",
                    "Understanding MongoDB architecture",
                ],
            },
            ScheduleEntry {
                time: "11:15 AM - 11:45 AM",
                title: "Documents & Collections",
                kind: SessionKind::Theory,
                topics: &[
                    "BSON vs JSON",
                    "Document structure and validation",
                    "Collection design patterns",
                    "Data modeling best practices",
                ],
            },
            ScheduleEntry {
                time: "11:45 AM - 12:30 PM",
                title: "Basic CRUD Operations",
                kind: SessionKind::HandsOn,
                topics: &[
                    "Insert operations (insertOne, insertMany)",
                    "Find operations and query selectors",
                    "Update operations (updateOne, updateMany)",
                    "Delete operations and bulk writes",
                ],
            },
        ],
    },
    DaySchedule {
        day: Day::Two,
        title: "Day 2: Advanced MongoDB & Real-World Applications",
        entries: &[
            ScheduleEntry {
                time: "9:00 AM - 10:30 AM",
                title: "Advanced Querying",
                kind: SessionKind::HandsOn,
                topics: &[
                    "Complex query operators",
                    "Regular expressions in queries",
                    "Array and embedded document queries",
                    "Geospatial queries",
                ],
            },
            ScheduleEntry {
                time: "11:00 AM - 12:30 PM",
                title: "Aggregation Framework",
                kind: SessionKind::Theory,
                topics: &[
                    "Aggregation pipeline concepts",
                    "Common aggregation stages",
                    "Data transformation techniques",
                    "Performance optimization",
                ],
            },
            ScheduleEntry {
                time: "1:30 PM - 3:00 PM",
                title: "Indexing & Performance",
                kind: SessionKind::HandsOn,
                topics: &[
                    "Index types and creation",
                    "Query optimization",
                    "Explain plans and profiling",
                    "Compound and partial indexes",
                ],
            },
            ScheduleEntry {
                time: "3:30 PM - 5:00 PM",
                title: "Real-World Project",
                kind: SessionKind::Project,
                topics: &[
                    "Building a complete application",
                    "Schema design for e-commerce",
                    "Implementing user authentication",
                    "Deployment and monitoring",
                ],
            },
        ],
    },
];
