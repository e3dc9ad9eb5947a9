//! The article collection. Bodies live under `content/articles/` as plain
//! markdown and are embedded at compile time.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "difficulty-beginner",
            Difficulty::Intermediate => "difficulty-intermediate",
            Difficulty::Advanced => "difficulty-advanced",
            Difficulty::Expert => "difficulty-expert",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub body: &'static str,
    pub read_time: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    pub date: &'static str,
    pub featured: bool,
}

pub static ARTICLES: [Article; 8] = [
    Article {
        id: 1,
        title: "Building Redis from Scratch: RESP Protocol & Persistence",
        slug: "building-redis-from-scratch",
        excerpt: "Deep dive into implementing Redis from first principles, covering the RESP protocol, data structures, and persistence mechanisms.",
        body: include_str!("../../content/articles/building-redis-from-scratch.md"),
        read_time: "12 min read",
        difficulty: Difficulty::Expert,
        tags: &["Go", "Database", "Protocol Design", "Systems Programming"],
        date: "2024-01-15",
        featured: true,
    },
    Article {
        id: 2,
        title: "Microservices Communication Patterns: Event-Driven Architecture",
        slug: "microservices-communication-patterns",
        excerpt: "Exploring different communication patterns in microservices architecture, from synchronous to asynchronous messaging.",
        body: include_str!("../../content/articles/microservices-communication-patterns.md"),
        read_time: "15 min read",
        difficulty: Difficulty::Expert,
        tags: &["Microservices", "Event-Driven", "Architecture", "Go"],
        date: "2024-01-20",
        featured: true,
    },
    Article {
        id: 3,
        title: "Database Sharding Strategies: Horizontal Partitioning at Scale",
        slug: "database-sharding-strategies",
        excerpt: "Comprehensive guide to database sharding, covering different strategies, challenges, and implementation patterns.",
        body: include_str!("../../content/articles/database-sharding-strategies.md"),
        read_time: "18 min read",
        difficulty: Difficulty::Expert,
        tags: &["Database", "Sharding", "Scalability", "Go"],
        date: "2024-01-25",
        featured: true,
    },
    Article {
        id: 4,
        title: "API Rate Limiting: Token Bucket vs Sliding Window",
        slug: "api-rate-limiting-algorithms",
        excerpt: "Deep dive into rate limiting algorithms, implementation patterns, and distributed rate limiting strategies.",
        body: include_str!("../../content/articles/api-rate-limiting-algorithms.md"),
        read_time: "14 min read",
        difficulty: Difficulty::Advanced,
        tags: &["Rate Limiting", "Algorithms", "Go", "Redis"],
        date: "2024-01-30",
        featured: false,
    },
    Article {
        id: 5,
        title: "Caching Strategies: From L1 to Distributed Caches",
        slug: "caching-strategies-comprehensive",
        excerpt: "Complete guide to caching at different levels, from CPU caches to distributed Redis clusters.",
        body: include_str!("../../content/articles/caching-strategies-comprehensive.md"),
        read_time: "16 min read",
        difficulty: Difficulty::Advanced,
        tags: &["Caching", "Performance", "Redis", "Memory Management"],
        date: "2024-02-05",
        featured: false,
    },
    Article {
        id: 6,
        title: "Message Queue Patterns: Publisher-Subscriber vs Work Queues",
        slug: "message-queue-patterns",
        excerpt: "Exploring different message queue patterns, from simple pub/sub to complex event streaming architectures.",
        body: include_str!("../../content/articles/message-queue-patterns.md"),
        read_time: "17 min read",
        difficulty: Difficulty::Advanced,
        tags: &["Message Queues", "RabbitMQ", "Kafka", "Event Streaming"],
        date: "2024-02-10",
        featured: false,
    },
    Article {
        id: 7,
        title: "Database Connection Pooling: Optimizing Resource Usage",
        slug: "database-connection-pooling",
        excerpt: "Deep dive into database connection pooling strategies, from basic pools to advanced connection management.",
        body: include_str!("../../content/articles/database-connection-pooling.md"),
        read_time: "13 min read",
        difficulty: Difficulty::Advanced,
        tags: &["Database", "Connection Pooling", "Performance", "Go"],
        date: "2024-02-15",
        featured: false,
    },
    Article {
        id: 8,
        title: "API Gateway Patterns: Routing, Authentication, and Rate Limiting",
        slug: "api-gateway-patterns",
        excerpt: "Comprehensive guide to API gateway implementation, covering routing strategies, authentication, and cross-cutting concerns.",
        body: include_str!("../../content/articles/api-gateway-patterns.md"),
        read_time: "19 min read",
        difficulty: Difficulty::Expert,
        tags: &["API Gateway", "Microservices", "Authentication", "Go"],
        date: "2024-02-20",
        featured: true,
    },
];

/// Linear search by slug; the collection is small and fixed.
pub fn find_by_slug(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

/// Featured articles in their original relative order.
pub fn featured() -> impl Iterator<Item = &'static Article> {
    ARTICLES.iter().filter(|a| a.featured)
}
