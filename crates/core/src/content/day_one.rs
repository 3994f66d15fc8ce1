use crate::model::{
    CourseDay, Day, DetailBlock, DetailCard, FactCard, LabeledSnippet, Language, Session,
    SessionId, SessionKind, Snippet,
};

pub(super) static DAY_ONE: CourseDay = CourseDay {
    day: Day::One,
    title: "NoSQL Foundations & MongoDB Basics",
    tagline: "Master the fundamentals of NoSQL databases, understand the CAP \
              theorem, explore MongoDB architecture, and get hands-on with your \
              first CRUD operations.",
    sessions: &[
        Session {
            id: SessionId::new(1),
            title: "Introduction to NoSQL",
            duration: "30 min",
            kind: SessionKind::Theory,
            summary: "Understanding the fundamentals of NoSQL databases and why \
                      they emerged as an alternative to traditional RDBMS.",
            topics: &[
                "What is NoSQL and why it emerged",
                "Comparison with traditional RDBMS",
                "Real-world use cases and examples",
                "SQL vs NoSQL document structure",
            ],
            details: &[
                DetailBlock::Prose {
                    heading: "What is NoSQL and Why It Emerged",
                    body: "NoSQL stands for \"Not Only SQL\". It refers to a \
                           category of databases designed to handle:\n\n\
                           - Unstructured or semi-structured data\n\
                           - Large volumes of rapidly changing data\n\
                           - Flexible schemas (no strict tables and columns)\n\n\
                           Traditional relational databases like MySQL and \
                           PostgreSQL store data in fixed rows and columns, which \
                           works well for structured data like financial records. \
                           But in modern applications (social media, e-commerce, \
                           IoT), data can be messy, fast-changing, and huge in \
                           volume.",
                },
                DetailBlock::Bullets {
                    heading: "What NoSQL solves",
                    items: &[
                        "Handling Big Data",
                        "Scaling horizontally (across many machines)",
                        "Faster development with flexible data structures",
                        "Looser schema definition",
                        "Query language through the API",
                        "Relaxation of the ACID properties",
                    ],
                },
                DetailBlock::Facts {
                    heading: "Real-World Use Cases and Examples",
                    intro: "Where the flexible document model earns its keep:",
                    facts: &[
                        FactCard {
                            name: "Social Media",
                            icon: "📱",
                            description: "Platforms like Facebook or Twitter store \
                                          millions of posts, comments, likes, all \
                                          with different formats.",
                            detail: "A post might have text, images, videos, or \
                                     links. This fits well with NoSQL's flexible \
                                     document model.",
                            example: "One posts collection holds every shape of post.",
                        },
                        FactCard {
                            name: "E-Commerce",
                            icon: "🛒",
                            description: "Each product may have different \
                                          attributes: size, color, warranty, etc.",
                            detail: "Instead of forcing a table structure, you can \
                                     store each product as a document with only the \
                                     fields it needs.",
                            example: "A laptop and a t-shirt live side by side with \
                                      different fields.",
                        },
                        FactCard {
                            name: "IoT and Sensor Data",
                            icon: "🌐",
                            description: "Devices send data in real-time, often in \
                                          different formats and frequency.",
                            detail: "NoSQL handles this streaming, high-volume, \
                                     schema-less data easily.",
                            example: "Millions of sensor readings per hour, no \
                                      migrations required.",
                        },
                    ],
                },
                DetailBlock::Comparison {
                    heading: "SQL Table vs MongoDB Document",
                    left: LabeledSnippet {
                        label: "SQL Example (User in RDBMS)",
                        snippet: Snippet::new(
                            Language::Sql,
                            r#"CREATE TABLE users (
  id INT PRIMARY KEY,
  name VARCHAR(100),
  email VARCHAR(100),
  age INT,
  city VARCHAR(100)
);

INSERT INTO users VALUES (1, 'Ali', 'ali@email.com', 25, 'Cairo');"#,
                        ),
                    },
                    right: LabeledSnippet {
                        label: "NoSQL Example (User Document in MongoDB)",
                        snippet: Snippet::new(
                            Language::Json,
                            r#"{
  "_id": ObjectId("..."),
  "name": "Ali",
  "email": "ali@email.com",
  "age": 25,
  "city": "Cairo",
  "preferences": {
    "theme": "dark",
    "notifications": true
  }
}"#,
                        ),
                    },
                },
            ],
        },
        Session {
            id: SessionId::new(2),
            title: "NoSQL Types & CAP Theorem",
            duration: "50 min",
            kind: SessionKind::Theory,
            summary: "Exploring the four main types of NoSQL databases and \
                      understanding the CAP theorem fundamentals.",
            topics: &[
                "Key-Value databases (Redis, DynamoDB)",
                "Document databases (MongoDB, CouchDB)",
                "Column-family databases (Cassandra, HBase)",
                "Graph databases (Neo4j, ArangoDB)",
                "CAP Theorem explained",
            ],
            details: &[
                DetailBlock::Cards {
                    heading: "The Four Types of NoSQL Databases",
                    intro: "NoSQL databases are categorized into four main types, \
                            each designed for specific use cases:",
                    cards: &[
                        DetailCard {
                            name: "Key-Value Stores",
                            icon: "🔑",
                            description: "Simplest NoSQL database type that stores \
                                          data as key-value pairs.",
                            examples: &["Redis", "DynamoDB", "Memcached"],
                            use_cases: &["Caching", "Session storage", "Real-time analytics"],
                            snippet: Snippet::new(
                                Language::Javascript,
                                r#"// Redis Example
SET user:123 "John Doe"
GET user:123
// Returns: "John Doe""#,
                            ),
                            pros: &["Fastest performance", "Simple to use", "Highly scalable"],
                            cons: &["Limited query capabilities", "No complex relationships"],
                        },
                        DetailCard {
                            name: "Document Databases",
                            icon: "📄",
                            description: "Store data in flexible, JSON-like \
                                          documents with nested structures.",
                            examples: &["MongoDB", "CouchDB", "Firebase Firestore"],
                            use_cases: &[
                                "Content management",
                                "E-commerce catalogs",
                                "User profiles",
                            ],
                            snippet: Snippet::new(
                                Language::Json,
                                r#"// MongoDB Example
{
  "_id": ObjectId("..."),
  "name": "John Doe",
  "email": "john@example.com",
  "address": {
    "street": "123 Main St",
    "city": "New York"
  },
  "hobbies": ["reading", "gaming"]
}"#,
                            ),
                            pros: &["Flexible schema", "Rich queries", "Natural data modeling"],
                            cons: &["Complex transactions", "Larger storage overhead"],
                        },
                        DetailCard {
                            name: "Column-Family Stores",
                            icon: "📊",
                            description: "Store data in columns rather than rows, \
                                          optimized for analytical queries.",
                            examples: &["Cassandra", "HBase", "ScyllaDB"],
                            use_cases: &[
                                "Time-series data",
                                "IoT applications",
                                "Big data analytics",
                            ],
                            snippet: Snippet::new(
                                Language::Sql,
                                r#"// Cassandra Example
CREATE TABLE sensor_data (
  sensor_id text,
  timestamp timestamp,
  temperature float,
  humidity float,
  PRIMARY KEY (sensor_id, timestamp)
);"#,
                            ),
                            pros: &[
                                "Excellent for analytics",
                                "Highly scalable",
                                "Fast writes",
                            ],
                            cons: &["Complex setup", "Limited ACID support"],
                        },
                        DetailCard {
                            name: "Graph Databases",
                            icon: "🕸️",
                            description: "Store data as nodes and relationships, \
                                          perfect for complex connections.",
                            examples: &["Neo4j", "ArangoDB", "Amazon Neptune"],
                            use_cases: &[
                                "Social networks",
                                "Recommendation engines",
                                "Fraud detection",
                            ],
                            snippet: Snippet::new(
                                Language::Javascript,
                                r#"// Neo4j Example
CREATE (john:Person {name: "John"})
CREATE (jane:Person {name: "Jane"})
CREATE (john)-[:FRIENDS_WITH]->(jane)
MATCH (a:Person)-[:FRIENDS_WITH]->(b:Person)
RETURN a.name, b.name"#,
                            ),
                            pros: &[
                                "Excellent for relationships",
                                "Complex queries",
                                "Natural for networks",
                            ],
                            cons: &["Slower for simple queries", "Higher complexity"],
                        },
                    ],
                },
                DetailBlock::Facts {
                    heading: "CAP Theorem Explained",
                    intro: "A distributed database can only guarantee two out of \
                            three properties. Think of it as a triangle where you \
                            can only choose two corners.",
                    facts: &[
                        FactCard {
                            name: "Consistency (C)",
                            icon: "🔄",
                            description: "All nodes see the same data at the same time",
                            detail: "When you write data to one node, all other \
                                     nodes immediately see the updated data. Like \
                                     having synchronized clocks across all servers.",
                            example: "Banking systems where account balance must be \
                                      consistent across all branches.",
                        },
                        FactCard {
                            name: "Availability (A)",
                            icon: "⚡",
                            description: "Every request receives a response",
                            detail: "The system continues to operate and respond to \
                                     requests even when some nodes are down or \
                                     unreachable.",
                            example: "Social media platforms that continue working \
                                      even if some servers fail.",
                        },
                        FactCard {
                            name: "Partition Tolerance (P)",
                            icon: "🌐",
                            description: "System continues to operate despite \
                                          network failures",
                            detail: "The system can handle network partitions \
                                     (communication failures between nodes) and \
                                     continue functioning.",
                            example: "Global applications that work even when \
                                      connections between data centers are \
                                      interrupted.",
                        },
                    ],
                },
                DetailBlock::Facts {
                    heading: "CAP Combinations",
                    intro: "What real systems pick:",
                    facts: &[
                        FactCard {
                            name: "CP (Consistency + Partition Tolerance)",
                            icon: "🔒",
                            description: "Sacrifices availability for consistency \
                                          and partition tolerance",
                            detail: "Writes block until the partition heals rather \
                                     than serving stale data.",
                            example: "Traditional relational databases in \
                                      distributed setups",
                        },
                        FactCard {
                            name: "AP (Availability + Partition Tolerance)",
                            icon: "🌍",
                            description: "Sacrifices consistency for availability \
                                          and partition tolerance",
                            detail: "Nodes keep answering during a partition and \
                                     reconcile afterwards.",
                            example: "MongoDB, Cassandra, DynamoDB",
                        },
                        FactCard {
                            name: "CA (Consistency + Availability)",
                            icon: "🏠",
                            description: "Sacrifices partition tolerance for \
                                          consistency and availability",
                            detail: "Only holds while the network never splits, so \
                                     it is effectively a single-node property.",
                            example: "Single-node databases, traditional RDBMS",
                        },
                    ],
                },
            ],
        },
        Session {
            id: SessionId::new(3),
            title: "NoSQL Architecture (Sharding & Replica Sets)",
            duration: "20 min",
            kind: SessionKind::Theory,
            summary: "Understanding distributed database architecture concepts \
                      and MongoDB's implementation.",
            topics: &[
                "Horizontal scaling with sharding",
                "High availability with replica sets",
                "MongoDB cluster architecture",
                "Data distribution strategies",
            ],
            details: &[
                DetailBlock::Prose {
                    heading: "Sharding: Horizontal Scaling",
                    body: "Sharding is MongoDB's approach to horizontal scaling, \
                           distributing data across multiple machines to handle \
                           large datasets and high throughput. Think of it as \
                           dividing a large library into multiple smaller \
                           libraries, each containing different books.",
                },
                DetailBlock::Facts {
                    heading: "Cluster Components",
                    intro: "Three roles cooperate in a sharded cluster:",
                    facts: &[
                        FactCard {
                            name: "Mongos (Query Router)",
                            icon: "🚦",
                            description: "Acts as the entry point for all client \
                                          requests",
                            detail: "Routes queries to appropriate shards and \
                                     aggregates results.",
                            example: "Like a traffic controller directing cars to \
                                      different lanes.",
                        },
                        FactCard {
                            name: "Config Servers",
                            icon: "🗺️",
                            description: "Store metadata about the cluster",
                            detail: "Keep track of which data is stored on which \
                                     shard.",
                            example: "Like a map showing which books are in which \
                                      library.",
                        },
                        FactCard {
                            name: "Shard Servers",
                            icon: "📚",
                            description: "Store the actual data",
                            detail: "Each shard contains a subset of the total \
                                     data.",
                            example: "Individual libraries containing specific book \
                                      categories.",
                        },
                    ],
                },
                DetailBlock::Facts {
                    heading: "Sharding Strategies",
                    intro: "How documents are assigned to shards:",
                    facts: &[
                        FactCard {
                            name: "Range-based Sharding",
                            icon: "📏",
                            description: "Data is partitioned based on a range of \
                                          values",
                            detail: "Simple to understand and good for range \
                                     queries, but can lead to uneven distribution.",
                            example: "User IDs 1-1000 on Shard A, 1001-2000 on \
                                      Shard B.",
                        },
                        FactCard {
                            name: "Hash-based Sharding",
                            icon: "🎲",
                            description: "Data is distributed using a hash function",
                            detail: "Even distribution and predictable performance, \
                                     but range queries may hit multiple shards.",
                            example: "Hash of user ID determines which shard gets \
                                      the data.",
                        },
                    ],
                },
                DetailBlock::Code {
                    heading: "Sharding Configuration Example",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Enable sharding for a database
sh.enableSharding("myapp")

// Shard a collection based on user_id
sh.shardCollection("myapp.users", {"user_id": 1})

// Add shards to the cluster
sh.addShard("shard1/shard1.example.com:27018")
sh.addShard("shard2/shard2.example.com:27018")"#,
                    ),
                },
                DetailBlock::Prose {
                    heading: "Replica Sets: High Availability",
                    body: "A replica set is a group of MongoDB servers that \
                           maintain the same data set, providing redundancy and \
                           high availability. Think of it as having multiple \
                           copies of the same book in different locations.",
                },
                DetailBlock::Facts {
                    heading: "Replica Set Roles",
                    intro: "Each member plays one of three roles:",
                    facts: &[
                        FactCard {
                            name: "Primary Node",
                            icon: "👑",
                            description: "The main server that handles all write \
                                          operations",
                            detail: "Receives all write requests and replicates \
                                     changes to secondaries.",
                            example: "The main library that accepts new book \
                                      donations.",
                        },
                        FactCard {
                            name: "Secondary Nodes",
                            icon: "📖",
                            description: "Servers that maintain copies of the \
                                          primary's data",
                            detail: "Handle read operations and can become primary \
                                     if needed.",
                            example: "Branch libraries with copies of books from \
                                      the main library.",
                        },
                        FactCard {
                            name: "Arbiter Node",
                            icon: "⚖️",
                            description: "Participates in elections but doesn't \
                                          hold data",
                            detail: "Breaks ties in primary elections.",
                            example: "A referee that helps decide which library \
                                      becomes the main one.",
                        },
                    ],
                },
                DetailBlock::Code {
                    heading: "Replica Set Configuration",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Initialize replica set
rs.initiate({
  _id: "myReplicaSet",
  members: [
    { _id: 0, host: "server1:27017" },
    { _id: 1, host: "server2:27017" },
    { _id: 2, host: "server3:27017" }
  ]
})

// Check replica set status
rs.status()

// Force election of new primary
rs.freeze(30)  // Freeze current primary for 30 seconds"#,
                    ),
                },
                DetailBlock::Bullets {
                    heading: "Real-World Architecture Example",
                    items: &[
                        "Shard by user_id for even distribution across four shards",
                        "3-node replica set per shard for high availability",
                        "Primary handles all writes; secondaries serve reads and backups",
                        "Can handle millions of users with 99.99% uptime",
                        "Geographic distribution for global users",
                        "Horizontal scaling as the user base grows",
                    ],
                },
            ],
        },
        Session {
            id: SessionId::new(4),
            title: "MongoDB Basics & First Hands-on",
            duration: "1 hr 10 min",
            kind: SessionKind::HandsOn,
            summary: "Getting started with MongoDB: understanding the structure \
                      and performing basic CRUD operations.",
            topics: &[
                "Installing MongoDB and Mongo Shell",
                "MongoDB document structure",
                "Database → Collection → Document hierarchy",
                "Basic CRUD operations",
                "Query operators and filters",
            ],
            details: &[
                DetailBlock::Code {
                    heading: "Windows Installation",
                    snippet: Snippet::new(
                        Language::Shell,
                        r#"# Download MongoDB Community Server
# Visit: https://www.mongodb.com/try/download/community

# Download MongoDB Shell
# Visit: https://www.mongodb.com/try/download/shell

# Add to PATH (if not done automatically)
# C:\Program Files\MongoDB\Server\7.0\bin

# Start MongoDB service
net start MongoDB

# Connect using MongoDB Shell
mongosh"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Linux Installation (Ubuntu/Debian)",
                    snippet: Snippet::new(
                        Language::Shell,
                        r#"# Import MongoDB public GPG key
wget -qO - https://www.mongodb.org/static/pgp/server-7.0.asc | sudo apt-key add -

# Create a list file for MongoDB
echo "deb [ arch=amd64,arm64 ] https://repo.mongodb.org/apt/ubuntu jammy/mongodb-org/7.0 multiverse" | sudo tee /etc/apt/sources.list.d/mongodb-org-7.0.list

# Update package database
sudo apt-get update

# Install MongoDB packages
sudo apt-get install -y mongodb-org

# Start and enable MongoDB service
sudo systemctl start mongod
sudo systemctl enable mongod

# Install MongoDB Shell
sudo apt-get install -y mongodb-mongosh

# Connect to MongoDB
mongosh"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Verify Installation",
                    snippet: Snippet::new(
                        Language::Shell,
                        r#"# Check MongoDB status
sudo systemctl status mongod  # Linux
net start MongoDB             # Windows

# Connect to MongoDB
mongosh

# Test connection
show dbs

# Create and use a test database
use testdb
db.createCollection("test")
db.test.insertOne({name: "test", value: 123})
db.test.find()"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Create Operations",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Insert a single document
db.users.insertOne({
  name: "Ali",
  age: 25,
  city: "Cairo",
  email: "ali@email.com"
});

// Insert multiple documents
db.users.insertMany([
  { name: "Sara", age: 28, city: "Alexandria" },
  { name: "Ahmed", age: 32, city: "Giza" }
]);"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Read Operations",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Find all documents
db.users.find();

// Find with filter
db.users.find({ age: { $gt: 20 } });

// Find one document
db.users.findOne({ name: "Ali" });

// Projection (select specific fields)
db.users.find({}, { name: 1, age: 1, _id: 0 });"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Update Operations",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Update one document
db.users.updateOne(
  { name: "Ali" },
  { $set: { age: 26, city: "New Cairo" } }
);

// Update multiple documents
db.users.updateMany(
  { age: { $lt: 30 } },
  { $inc: { age: 1 } }
);"#,
                    ),
                },
                DetailBlock::Code {
                    heading: "Delete Operations",
                    snippet: Snippet::new(
                        Language::Javascript,
                        r#"// Delete one document
db.users.deleteOne({ name: "Ali" });

// Delete multiple documents
db.users.deleteMany({ age: { $lt: 18 } });

// Delete all documents in collection
db.users.deleteMany({});"#,
                    ),
                },
            ],
        },
    ],
};
