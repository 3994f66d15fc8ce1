use crate::model::{Language, QueryExample, Snippet};

/// The four canned demo queries. Each result string is fixed at definition
/// time; the "Run" button never executes the code.
pub(super) static DEMO_QUERIES: [QueryExample; 4] = [
    QueryExample {
        title: "Insert Document",
        description: "Create a new user document",
        code: Snippet::new(
            Language::Javascript,
            r#"db.users.insertOne({
  name: "Alice Johnson",
  email: "alice@example.com",
  age: 28,
  skills: ["JavaScript", "Python", "MongoDB"],
  createdAt: new Date()
})"#,
        ),
        result: Some(Snippet::new(
            Language::Json,
            r#"{
  "acknowledged": true,
  "insertedId": ObjectId("60d5ec49f1b2c72b2c123456")
}"#,
        )),
    },
    QueryExample {
        title: "Find with Filters",
        description: "Query users by age and skills",
        code: Snippet::new(
            Language::Javascript,
            r#"db.users.find({
  age: { $gte: 25 },
  skills: { $in: ["MongoDB", "JavaScript"] }
}).pretty()"#,
        ),
        result: Some(Snippet::new(
            Language::Json,
            r#"[
  {
    "_id": ObjectId("60d5ec49f1b2c72b2c123456"),
    "name": "Alice Johnson",
    "email": "alice@example.com",
    "age": 28,
    "skills": ["JavaScript", "Python", "MongoDB"],
    "createdAt": ISODate("2021-06-25T10:30:00Z")
  }
]"#,
        )),
    },
    QueryExample {
        title: "Aggregation Pipeline",
        description: "Group users by age and count skills",
        code: Snippet::new(
            Language::Javascript,
            r#"db.users.aggregate([
  {
    $group: {
      _id: "$age",
      totalUsers: { $sum: 1 },
      avgSkills: { $avg: { $size: "$skills" } }
    }
  },
  {
    $sort: { _id: 1 }
  }
])"#,
        ),
        result: Some(Snippet::new(
            Language::Json,
            r#"[
  { "_id": 25, "totalUsers": 2, "avgSkills": 3 },
  { "_id": 28, "totalUsers": 1, "avgSkills": 3 },
  { "_id": 30, "totalUsers": 1, "avgSkills": 4 }
]"#,
        )),
    },
    QueryExample {
        title: "Update with Array Operations",
        description: "Add new skills to a user",
        code: Snippet::new(
            Language::Javascript,
            r#"db.users.updateOne(
  { email: "alice@example.com" },
  {
    $addToSet: {
      skills: { $each: ["React", "Node.js"] }
    },
    $set: { updatedAt: new Date() }
  }
)"#,
        ),
        result: Some(Snippet::new(
            Language::Json,
            r#"{
  "acknowledged": true,
  "matchedCount": 1,
  "modifiedCount": 1
}"#,
        )),
    },
];
