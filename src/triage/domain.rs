//! Domain detection: map free-text task descriptions to a specialist.
//!
//! An ordered signature table encodes precedence as data: specific framework
//! names come before their parent language, specific platform terms before
//! generic category terms. First match wins with a fixed confidence; the
//! matched domain is then looked up in a separate specialist map. A domain
//! with no map entry yields an empty specialist while keeping the domain tag,
//! which is distinct from "no domain recognized at all".

use serde::Serialize;

/// Confidence reported for any signature hit. Not derived from match
/// strength.
const MATCH_CONFIDENCE: f64 = 0.85;

/// One entry in the detection table: literal lowercase needles tested with
/// simple containment, in table order.
struct DomainSignature {
    needles: &'static [&'static str],
    domain: &'static str,
    keywords: &'static [&'static str],
}

const DOMAIN_SIGNATURES: &[DomainSignature] = &[
    // Specific frameworks (highest priority)
    DomainSignature { needles: &["django", "fastapi"], domain: "python", keywords: &["django", "fastapi"] },
    DomainSignature { needles: &["next.js", "nextjs"], domain: "nextjs", keywords: &["nextjs"] },
    DomainSignature { needles: &["react native", "flutter"], domain: "mobile", keywords: &["react native", "flutter"] },
    DomainSignature { needles: &["spring boot"], domain: "java", keywords: &["spring boot"] },
    DomainSignature { needles: &["laravel"], domain: "php", keywords: &["laravel"] },
    DomainSignature { needles: &["rails"], domain: "ruby", keywords: &["rails"] },
    // Languages
    DomainSignature { needles: &["python", "pytest", ".py"], domain: "python", keywords: &["python"] },
    DomainSignature { needles: &["typescript", ".ts"], domain: "typescript", keywords: &["typescript"] },
    DomainSignature { needles: &["golang", ".go"], domain: "golang", keywords: &["golang"] },
    DomainSignature { needles: &["rust", "cargo", ".rs"], domain: "rust", keywords: &["rust"] },
    DomainSignature { needles: &["java", "maven", "gradle"], domain: "java", keywords: &["java"] },
    DomainSignature { needles: &["c#", "csharp", ".net"], domain: "csharp", keywords: &["csharp"] },
    DomainSignature { needles: &["javascript", "node.js", "nodejs"], domain: "javascript", keywords: &["javascript"] },
    DomainSignature { needles: &["php", "composer"], domain: "php", keywords: &["php"] },
    DomainSignature { needles: &["swift", "ios"], domain: "swift", keywords: &["swift"] },
    // Infrastructure
    DomainSignature { needles: &["kubernetes", "k8s", "helm"], domain: "kubernetes", keywords: &["kubernetes"] },
    DomainSignature { needles: &["docker", "container", "compose"], domain: "docker", keywords: &["docker"] },
    DomainSignature { needles: &["terraform", ".tf"], domain: "terraform", keywords: &["terraform"] },
    DomainSignature { needles: &["ci/cd", "pipeline", "github actions"], domain: "devops", keywords: &["cicd"] },
    // Data
    DomainSignature { needles: &["postgres", "psql"], domain: "postgres", keywords: &["postgres"] },
    DomainSignature { needles: &["mysql", "database", "migration"], domain: "database", keywords: &["database"] },
    DomainSignature { needles: &["machine learning", "ml model"], domain: "ml", keywords: &["ml"] },
    // Security
    DomainSignature { needles: &["security", "auth", "oauth", "jwt"], domain: "security", keywords: &["security"] },
    // Frontend
    DomainSignature { needles: &["react", "jsx", "hooks"], domain: "react", keywords: &["react"] },
    DomainSignature { needles: &["vue", "vuex", "nuxt"], domain: "vue", keywords: &["vue"] },
    DomainSignature { needles: &["angular", "rxjs"], domain: "angular", keywords: &["angular"] },
    // Testing
    DomainSignature { needles: &["testing", "test", "qa"], domain: "testing", keywords: &["testing"] },
    // Backend
    DomainSignature { needles: &["api", "rest", "graphql"], domain: "api", keywords: &["api"] },
    DomainSignature { needles: &["backend", "server"], domain: "backend", keywords: &["backend"] },
];

/// Domain tag to recommended specialist. Domains without an entry (for
/// example `mobile`) are recognized but have no mapped specialist.
const SPECIALIST_MAP: &[(&str, &str)] = &[
    ("python", "voltagent-lang:python-pro"),
    ("typescript", "voltagent-lang:typescript-pro"),
    ("javascript", "voltagent-lang:javascript-pro"),
    ("golang", "voltagent-lang:golang-pro"),
    ("rust", "voltagent-lang:rust-engineer"),
    ("java", "voltagent-lang:java-architect"),
    ("csharp", "voltagent-lang:csharp-developer"),
    ("ruby", "voltagent-lang:rails-expert"),
    ("php", "voltagent-lang:php-pro"),
    ("swift", "voltagent-lang:swift-expert"),
    ("react", "voltagent-lang:react-specialist"),
    ("vue", "voltagent-lang:vue-expert"),
    ("angular", "voltagent-lang:angular-architect"),
    ("nextjs", "voltagent-lang:nextjs-developer"),
    ("kubernetes", "voltagent-infra:kubernetes-specialist"),
    ("docker", "voltagent-infra:docker-expert"),
    ("terraform", "voltagent-infra:terraform-engineer"),
    ("devops", "voltagent-infra:devops-engineer"),
    ("security", "voltagent-infra:security-engineer"),
    ("postgres", "voltagent-data-ai:postgres-pro"),
    ("database", "voltagent-data-ai:database-optimizer"),
    ("ml", "voltagent-data-ai:ml-engineer"),
    ("testing", "voltagent-qa-sec:qa-expert"),
    ("api", "voltagent-core-dev:api-designer"),
    ("backend", "voltagent-core-dev:backend-developer"),
];

/// Detection result. All fields are empty/zero when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainMatch {
    pub specialist: String,
    pub domain: String,
    pub confidence: f64,
    pub keywords: Vec<String>,
}

impl DomainMatch {
    fn none() -> Self {
        Self {
            specialist: String::new(),
            domain: String::new(),
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Detect the task domain and recommend a specialist.
///
/// Total over all inputs: always exactly one result, never a fault.
pub fn detect_domain(description: &str) -> DomainMatch {
    let haystack = description.to_lowercase();

    for signature in DOMAIN_SIGNATURES {
        if signature.needles.iter().any(|n| haystack.contains(n)) {
            let specialist = SPECIALIST_MAP
                .iter()
                .find(|(domain, _)| *domain == signature.domain)
                .map(|(_, specialist)| (*specialist).to_string())
                .unwrap_or_default();
            return DomainMatch {
                specialist,
                domain: signature.domain.to_string(),
                confidence: MATCH_CONFIDENCE,
                keywords: signature.keywords.iter().map(ToString::to_string).collect(),
            };
        }
    }

    DomainMatch::none()
}
