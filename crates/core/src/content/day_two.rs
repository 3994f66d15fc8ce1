use crate::model::{
    CourseDay, Day, DetailBlock, Language, QueryExample, Session, SessionId, SessionKind, Snippet,
};

const fn query(title: &'static str, description: &'static str, source: &'static str) -> QueryExample {
    QueryExample {
        title,
        description,
        code: Snippet::new(Language::Javascript, source),
        result: None,
    }
}

pub(super) static DAY_TWO: CourseDay = CourseDay {
    day: Day::Two,
    title: "Advanced MongoDB & Real-World Applications",
    tagline: "Master advanced MongoDB concepts including complex queries, \
              aggregation pipelines, indexing strategies, and performance \
              optimization techniques for production environments.",
    sessions: &[
        Session {
            id: SessionId::new(1),
            title: "Advanced Querying & Query Operators",
            duration: "60 min",
            kind: SessionKind::HandsOn,
            summary: "Master MongoDB query and update operators with \
                      comprehensive examples covering comparison, logical, \
                      element, evaluation, array, and update operations.",
            topics: &[
                "Comparison Query Operators ($eq, $gt, $gte, $in, $lt, $lte, $ne, $nin)",
                "Logical Query Operators ($and, $or, $not, $nor)",
                "Element Query Operators ($exists, $type)",
                "Evaluation Query Operators ($expr, $regex, $text, $where)",
                "Array Query Operators ($all, $elemMatch, $size)",
                "Update Operators ($set, $unset, $inc, $push, $pull, $addToSet)",
                "Regular expressions in queries",
                "Array and embedded document queries",
                "Geospatial queries",
            ],
            details: &[
                DetailBlock::Examples {
                    heading: "Comparison Query Operators",
                    examples: &[
                        query(
                            "$eq — find users with specific age",
                            "Matches values equal to a specified value. \
                             `db.users.find({ age: 25 })` is the shorthand form.",
                            r#"db.users.find({ age: { $eq: 25 } })"#,
                        ),
                        query(
                            "$gt — find expensive products",
                            "Matches values greater than a specified value; here, \
                             products priced above 30000 EGP.",
                            r#"db.products.find({ price: { $gt: 30000 } })"#,
                        ),
                        query(
                            "$gte — find users registered after a date",
                            "Greater-than-or-equal also works on dates.",
                            r#"db.users.find({ registrationDate: { $gt: new Date("2023-06-01") } })"#,
                        ),
                        query(
                            "$in — find users from specific cities",
                            "Matches any of the values specified in an array.",
                            r#"db.users.find({ "address.city": { $in: ["Cairo", "Alexandria", "Giza"] } })"#,
                        ),
                        query(
                            "$lt / $lte — find budget products",
                            "Less-than and less-than-or-equal bound a range from \
                             above.",
                            r#"db.products.find({ price: { $lt: 20000 } })
db.products.find({ rating: { $lte: 4.0 } })"#,
                        ),
                        query(
                            "$ne / $nin — exclude values",
                            "Not-equal and not-in invert a match; here, non-Apple \
                             products and users outside the major cities.",
                            r#"db.products.find({ brand: { $ne: "Apple" } })
db.users.find({ "address.city": { $nin: ["Cairo", "Alexandria", "Giza"] } })"#,
                        ),
                    ],
                },
                DetailBlock::Examples {
                    heading: "Logical Query Operators",
                    examples: &[
                        query(
                            "$and — find adult users from Cairo",
                            "All conditions must be true. The implicit form \
                             `db.users.find({ age: { $gte: 18 }, \"address.city\": \
                             \"Cairo\" })` is equivalent.",
                            r#"db.users.find({ $and: [ { age: { $gte: 18 } }, { "address.city": "Cairo" } ] })"#,
                        ),
                        query(
                            "$and — find expensive electronics in stock",
                            "Three conditions combined: category, price floor, and \
                             stock on hand.",
                            r#"db.products.find({ $and: [
  { category: "electronics" },
  { price: { $gt: 30000 } },
  { stock: { $gt: 0 } }
] })"#,
                        ),
                        query(
                            "$or — find discounted or highly rated products",
                            "At least one condition must be true: more than 20% \
                             discount OR rating 4.5+.",
                            r#"db.products.find({ $or: [ { discount: { $gt: 0.2 } }, { rating: { $gte: 4.5 } } ] })"#,
                        ),
                        query(
                            "$not — find users not in an age range",
                            "Inverts the inner expression: younger than 25 or older \
                             than 35.",
                            r#"db.users.find({ age: { $not: { $gte: 25, $lte: 35 } } })"#,
                        ),
                        query(
                            "$nor — exclude several conditions at once",
                            "Matches documents that fail every listed clause.",
                            r#"db.products.find({ $nor: [ { category: "electronics" }, { price: { $gt: 50000 } } ] })"#,
                        ),
                    ],
                },
                DetailBlock::Examples {
                    heading: "Element Query Operators",
                    examples: &[
                        query(
                            "$exists — find users with a phone number",
                            "Matches documents that have (or lack) a field at all.",
                            r#"db.users.find({ phone: { $exists: true } })"#,
                        ),
                        query(
                            "$type — find string-typed prices",
                            "Matches fields by BSON type, useful for spotting \
                             inconsistent data.",
                            r#"db.products.find({ price: { $type: "string" } })"#,
                        ),
                    ],
                },
                DetailBlock::Examples {
                    heading: "Evaluation Query Operators",
                    examples: &[
                        query(
                            "$regex — find products whose names start with iPhone",
                            "Regular expression matching; anchor with ^ to use an \
                             index prefix.",
                            r#"db.products.find({ name: { $regex: /^iPhone/ } })"#,
                        ),
                        query(
                            "$expr — compare two fields of the same document",
                            "Allows aggregation expressions inside the query \
                             language; here, users who registered this year.",
                            r#"db.users.find({ $expr: { $eq: [{ $year: "$registrationDate" }, { $year: new Date() }] } })"#,
                        ),
                        query(
                            "$text — full-text search",
                            "Requires a text index on the searched fields.",
                            r#"db.products.find({ $text: { $search: "iPhone smartphone" } })"#,
                        ),
                    ],
                },
                DetailBlock::Examples {
                    heading: "Array Query Operators",
                    examples: &[
                        query(
                            "$all — match every listed element",
                            "The array must contain all specified tags, in any \
                             order.",
                            r#"db.products.find({ tags: { $all: ["camera", "4k"] } })"#,
                        ),
                        query(
                            "$elemMatch — match one element against several criteria",
                            "A single review must satisfy both conditions at once.",
                            r#"db.products.find({ reviews: { $elemMatch: { rating: { $gte: 4 }, verified: true } } })"#,
                        ),
                        query(
                            "$size — match by array length",
                            "Finds products with exactly three tags.",
                            r#"db.products.find({ tags: { $size: 3 } })"#,
                        ),
                    ],
                },
                DetailBlock::Examples {
                    heading: "Update Operators",
                    examples: &[
                        query(
                            "$set / $unset — change or remove fields",
                            "Sets new values on matched documents, or deletes a \
                             field entirely.",
                            r#"db.users.updateOne(
  { name: "Ali" },
  { $set: { age: 26, "preferences.lastUpdated": new Date() } }
)
db.users.updateOne({ name: "Ali" }, { $unset: { phone: "" } })"#,
                        ),
                        query(
                            "$inc — adjust numeric fields in place",
                            "Atomic increment; negative values decrement.",
                            r#"db.products.updateMany({ category: "electronics" }, { $inc: { stock: -1 } })"#,
                        ),
                        query(
                            "$push — append a review to a product",
                            "Appends to an array field, creating it if missing.",
                            r#"db.products.updateOne(
  { name: "iPhone 15 Pro" },
  { $push: { reviews: {
      userId: ObjectId("64a1b2c3d4e5f6789abcdef1"),
      rating: 4,
      comment: "Great product!",
      date: new Date()
  } } }
)"#,
                        ),
                        query(
                            "$pull / $addToSet — remove or deduplicate elements",
                            "$pull removes matching elements; $addToSet appends \
                             only when the value is not already present.",
                            r#"db.users.updateOne({ name: "Ali" }, { $pull: { hobbies: "gaming" } })
db.users.updateOne({ name: "Ali" }, { $addToSet: { hobbies: "reading" } })"#,
                        ),
                    ],
                },
            ],
        },
        Session {
            id: SessionId::new(2),
            title: "Aggregation Framework",
            duration: "60 min",
            kind: SessionKind::Theory,
            summary: "Learn how to process and analyze your data with MongoDB's \
                      powerful Aggregation Framework.",
            topics: &[
                "Understanding aggregation pipelines and stages",
                "Filtering data with $match",
                "Grouping and aggregating data with $group",
                "Reshaping documents with $project",
                "Sorting and limiting results with $sort and $limit",
                "Deconstructing arrays with $unwind",
                "Joining collections with $lookup",
                "Building a complete, multi-stage pipeline",
            ],
            details: &[
                DetailBlock::Prose {
                    heading: "What the Aggregation Framework Is",
                    body: "The Aggregation Framework is one of MongoDB's most \
                           powerful features. It allows you to process data records \
                           and return computed results. Think of it as a data \
                           processing pipeline, where documents from a collection \
                           pass through multiple stages, being transformed at each \
                           step.\n\nThis is essential for tasks like generating \
                           reports, performing complex data analysis, and \
                           transforming data for different application needs.",
                },
                DetailBlock::Examples {
                    heading: "Pipeline Stages",
                    examples: &[
                        query(
                            "The $match Stage: Filtering Documents",
                            "$match is like the find() method, but for the \
                             aggregation pipeline. It filters documents to pass \
                             only those that match the specified condition(s) to \
                             the next pipeline stage.",
                            r#"// Find all products in the 'electronics' category with a price less than 500
db.products.aggregate([
  {
    $match: {
      category: "electronics",
      price: { $lt: 500 }
    }
  }
])"#,
                        ),
                        query(
                            "The $group Stage: Grouping and Aggregating",
                            "$group separates documents into groups according to a \
                             specified group key, then performs aggregate functions \
                             on each group, like sums, averages, or counts.",
                            r#"// Group products by category: product count and average price per category
db.products.aggregate([
  {
    $group: {
      _id: "$category",
      numProducts: { $sum: 1 },
      avgPrice: { $avg: "$price" }
    }
  }
])"#,
                        ),
                        query(
                            "The $project Stage: Reshaping Documents",
                            "$project reshapes documents: include, exclude, or \
                             rename fields, and create new computed fields.",
                            r#"// Show only the product name and price, and add a computed 'salePrice'
db.products.aggregate([
  { $match: { category: "laptops" } },
  {
    $project: {
      _id: 0,
      productName: "$name",
      price: 1,
      salePrice: { $multiply: ["$price", 0.8] }
    }
  }
])"#,
                        ),
                        query(
                            "The $sort and $limit Stages: Ordering and Pagination",
                            "$sort orders documents, while $limit restricts how \
                             many pass to the next stage. Often used together for \
                             top-N queries.",
                            r#"// Find the 5 most expensive electronics, sorted by price descending
db.products.aggregate([
  { $match: { category: "electronics" } },
  { $sort: { price: -1 } },
  { $limit: 5 }
])"#,
                        ),
                        query(
                            "The $unwind Stage: Deconstructing Arrays",
                            "$unwind outputs one document per array element, which \
                             is useful for processing individual array items.",
                            r#"// Create a separate document for each tag in a product's 'tags' array
db.products.aggregate([
  { $match: { name: "Pro Smartphone" } },
  { $unwind: "$tags" }
])

/*
If the original product was:
{ name: "Pro Smartphone", tags: ["camera", "4k", "fast"] }

The output will be 3 documents:
{ name: "Pro Smartphone", tags: "camera" }
{ name: "Pro Smartphone", tags: "4k" }
{ name: "Pro Smartphone", tags: "fast" }
*/"#,
                        ),
                        query(
                            "The $lookup Stage: Joining Collections",
                            "$lookup performs a left outer join to another \
                             collection, combining data from multiple collections \
                             in a single pipeline.",
                            r#"// For each order, find the customer details from the 'users' collection
db.orders.aggregate([
  {
    $lookup: {
      from: "users",
      localField: "customerId",
      foreignField: "_id",
      as: "customerDetails"
    }
  }
])"#,
                        ),
                        query(
                            "Putting It All Together: A Multi-Stage Pipeline",
                            "Find the total revenue per category for products that \
                             have been reviewed, and sort the results.",
                            r#"db.products.aggregate([
  // Stage 1: Filter for products that have at least one review
  {
    $match: {
      "reviews.0": { $exists: true }
    }
  },

  // Stage 2: Group by category and total the value of sold items
  {
    $group: {
      _id: "$category",
      totalRevenue: { $sum: { $multiply: ["$price", "$sold"] } }
    }
  },

  // Stage 3: Sort categories by total revenue, descending
  {
    $sort: {
      totalRevenue: -1
    }
  },

  // Stage 4: Reshape the output for clarity
  {
    $project: {
      _id: 0,
      category: "$_id",
      revenue: "$totalRevenue"
    }
  }
])"#,
                        ),
                    ],
                },
            ],
        },
        Session {
            id: SessionId::new(3),
            title: "Indexing & Performance",
            duration: "50 min",
            kind: SessionKind::HandsOn,
            summary: "Optimize MongoDB performance through strategic indexing, \
                      query optimization, and performance monitoring.",
            topics: &[
                "Index types and creation",
                "Query optimization",
                "Explain plans and profiling",
                "Compound and partial indexes",
            ],
            details: &[
                DetailBlock::Prose {
                    heading: "What Indexing Is",
                    body: "An index is a data structure that improves the speed of \
                           data retrieval by providing quick access to documents \
                           based on specific field values. Think of indexes as the \
                           table of contents in a book: instead of reading every \
                           page, you jump to the right section.\n\n\
                           The trade-offs: indexes consume additional disk space \
                           and memory, and slightly slow down writes \
                           (insert/update/delete).",
                },
                DetailBlock::Bullets {
                    heading: "Types of Indexes",
                    items: &[
                        "Single field indexes: index on one field (most common)",
                        "Compound indexes: multiple fields in a specific order",
                        "Multikey indexes: automatically created for array fields",
                        "Geospatial indexes: 2dsphere/2d for location queries",
                        "Text indexes: full-text search",
                        "Hashed indexes: hash-based sharding",
                        "Sparse indexes: only documents that have the indexed field",
                        "Partial indexes: only documents matching a filter expression",
                        "TTL indexes: automatically delete documents after a time",
                    ],
                },
                DetailBlock::Examples {
                    heading: "TechMart Performance Optimization",
                    examples: &[
                        query(
                            "Strategic Index Creation",
                            "Comprehensive indexing strategy for the e-commerce \
                             platform's collections.",
                            r#"// Users Collection Indexes
db.users.createIndex({ email: 1 }, { unique: true })
db.users.createIndex({ status: 1, "address.city": 1, age: 1 }) // ESR Rule
db.users.createIndex({ "address.location": "2dsphere" })
db.users.createIndex({ phone: 1 }, { sparse: true })

// Products Collection Indexes
db.products.createIndex({ category: 1, price: 1 })
db.products.createIndex({ tags: 1 }) // Multikey index for array
db.products.createIndex({ name: "text", description: "text" })

// Orders Collection Indexes
db.orders.createIndex({ customerId: 1, orderDate: -1 })
db.orders.createIndex({ orderNumber: 1 }, { unique: true })

// Partial index: only completed orders
db.orders.createIndex(
  { customerId: 1, deliveryDate: -1 },
  {
    partialFilterExpression: {
      status: { $in: ["delivered", "completed"] }
    }
  }
)

// TTL index for user sessions
db.sessions.createIndex(
  { lastActivity: 1 },
  { expireAfterSeconds: 86400 } // 24 hours
)"#,
                        ),
                        query(
                            "Query Performance Analysis",
                            "Use explain plans to verify that queries use indexes \
                             and examine few documents.",
                            r#"// Analyze product search query
db.products.find({
  category: "electronics",
  price: { $gte: 1000, $lte: 50000 },
  stock: { $gt: 0 }
}).sort({ price: 1 }).explain("executionStats")

// Expected result with proper indexing:
// {
//   "executionStats": {
//     "stage": "IXSCAN",           // Index scan (good)
//     "indexName": "category_1_price_1",
//     "totalDocsExamined": 50,     // Low examination
//     "totalDocsReturned": 50,     // Good ratio
//     "executionTimeMillis": 5     // Fast execution
//   }
// }

// GOOD: equality fields lead, range at the end
db.products.find({
  category: "electronics",
  brand: "Apple",
  price: { $gte: 30000 }
})

// BAD: range first defeats the compound index
db.products.find({
  price: { $gte: 30000 },
  category: "electronics"
})

// GOOD: projection to reduce data transfer
db.users.find(
  { "address.city": "Cairo", status: "active" },
  { name: 1, email: 1, "address.city": 1, _id: 0 }
)"#,
                        ),
                        query(
                            "Database Profiling & Monitoring",
                            "Monitor database performance in production with the \
                             profiler.",
                            r#"// Enable profiling for slow operations (>50ms)
db.setProfilingLevel(1, { slowms: 50 })

// Monitor slow queries
db.system.profile.find({
  "ns": { $regex: "TechMart\\." },
  "millis": { $gt: 100 }
}).sort({ ts: -1 }).limit(10)

// Find queries that don't use indexes
db.system.profile.find({
  "planSummary": "COLLSCAN",
  "ns": { $regex: "TechMart\\." }
}).sort({ ts: -1 })"#,
                        ),
                    ],
                },
                DetailBlock::Bullets {
                    heading: "What You've Mastered",
                    items: &[
                        "Advanced querying with complex operators and regular expressions",
                        "Aggregation pipelines for complex data transformations",
                        "Strategic indexing and performance optimization techniques",
                        "Query analysis and profiling for production environments",
                    ],
                },
            ],
        },
    ],
};
