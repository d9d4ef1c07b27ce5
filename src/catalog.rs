//! Built-in policy catalog.

use crate::model::{Catalog, Category, Rule, Severity};

type RuleRow = (&'static str, &'static str, &'static str, Severity);

struct Details {
    id: &'static str,
    pattern: Option<&'static str>,
    good: &'static str,
    bad: &'static str,
    fix_hint: &'static str,
}

const CATEGORIES: &[(&str, &str, &[RuleRow])] = &[
    (
        "naming_conventions",
        "Naming Conventions",
        &[
            ("CS-NAME-001", "Class/Interface Naming", "Classes and Interfaces must use PascalCase", Severity::High),
            ("CS-NAME-002", "Method Naming", "Methods must use PascalCase", Severity::High),
            ("CS-NAME-003", "Variable/Field/Parameter Naming", "Variables, fields, and parameters must use camelCase", Severity::High),
            ("CS-NAME-004", "Constant Naming", "Constants must use UPPER_SNAKE_CASE", Severity::High),
            ("CS-NAME-005", "Private Field Naming", "Private fields must use _camelCase (underscore prefix)", Severity::High),
            ("CS-NAME-006", "Async Method Naming", "Async methods must end with 'Async' suffix", Severity::High),
            ("CS-NAME-007", "Interface Naming", "Interfaces must be prefixed with 'I'", Severity::High),
            ("CS-NAME-008", "Request/Response DTO Naming", "Request and Response DTOs must end with Request or Response suffix", Severity::High),
            ("CS-NAME-009", "Boolean Variable Naming", "Boolean variables should use is/has/can/should prefixes", Severity::Medium),
            ("CS-NAME-010", "Event Handler Naming", "Event handlers should follow 'On' + EventName pattern", Severity::Medium),
        ],
    ),
    (
        "file_organization",
        "File & Project Organization",
        &[
            ("CS-FILE-001", "One Class Per File", "Each file should contain only one class", Severity::Medium),
            ("CS-FILE-002", "File Name Matches Class", "File name must match the class name it contains", Severity::High),
            ("CS-FILE-003", "Feature-Based Organization", "Group files logically by feature, not layer (vertical slicing)", Severity::Medium),
            ("CS-FILE-004", "Namespace Matches Folder Structure", "Namespace should reflect the folder structure", Severity::Medium),
        ],
    ),
    (
        "method_design",
        "Method Design & Readability",
        &[
            ("CS-METHOD-001", "Single Responsibility", "Methods should be small and do one thing", Severity::High),
            ("CS-METHOD-002", "Method Length", "Keep method length at or below 30 lines", Severity::Medium),
            ("CS-METHOD-003", "Parameter Count", "Avoid long parameter lists - use DTOs instead", Severity::Medium),
            ("CS-METHOD-004", "Cyclomatic Complexity", "Methods should have low cyclomatic complexity", Severity::Medium),
            ("CS-METHOD-005", "No Nested Ternary", "Avoid nested ternary operators", Severity::Medium),
        ],
    ),
    (
        "secure_coding",
        "Secure Coding Practices",
        &[
            ("CS-SEC-001", "Parameterized Queries", "Never concatenate SQL or user inputs - use parameterized queries", Severity::Critical),
            ("CS-SEC-002", "Input Validation", "Always validate user input", Severity::Critical),
            ("CS-SEC-003", "Log Sanitization", "Sanitize logs - no sensitive data (PIN, password, token)", Severity::Critical),
            ("CS-SEC-004", "Secret Protection", "Use SecureString or data masking for secrets", Severity::Critical),
            ("CS-SEC-005", "Configuration Security", "Protect configuration via Azure Key Vault or AWS Secrets Manager", Severity::Critical),
            ("CS-SEC-006", "No Hardcoded Credentials", "Never hardcode credentials in source code", Severity::Critical),
            ("CS-SEC-007", "XSS Prevention", "Sanitize output to prevent Cross-Site Scripting", Severity::Critical),
            ("CS-SEC-008", "Path Traversal Prevention", "Validate file paths to prevent directory traversal", Severity::Critical),
        ],
    ),
    (
        "exception_handling",
        "Exception Handling & Logging",
        &[
            ("CS-EXC-001", "Meaningful Exception Handling", "Use try-catch only where you can handle errors meaningfully", Severity::High),
            ("CS-EXC-002", "Contextual Logging", "Log exceptions with context, but not sensitive data", Severity::High),
            ("CS-EXC-003", "No Empty Catch Blocks", "Avoid empty catch blocks", Severity::Critical),
            ("CS-EXC-004", "Domain Exceptions", "Throw domain-specific exceptions when needed", Severity::Medium),
            ("CS-EXC-005", "No Catch-All Without Rethrow", "Catching all exceptions should rethrow or terminate", Severity::High),
        ],
    ),
    (
        "async_programming",
        "Asynchronous Programming",
        &[
            ("CS-ASYNC-001", "Always Await", "Always await async calls", Severity::High),
            ("CS-ASYNC-002", "No Blocking Async", "Don't block async with .Result or .Wait()", Severity::Critical),
            ("CS-ASYNC-003", "ConfigureAwait in Libraries", "Use ConfigureAwait(false) in library code", Severity::Medium),
            ("CS-ASYNC-004", "Async Void Avoidance", "Avoid async void except for event handlers", Severity::High),
            ("CS-ASYNC-005", "Proper Cancellation Token Usage", "Async methods should accept and use CancellationToken", Severity::Medium),
        ],
    ),
    (
        "dependency_injection",
        "Dependency Injection & SOLID",
        &[
            ("CS-DI-001", "Depend on Abstractions", "Depend on interfaces, not concrete types", Severity::High),
            ("CS-DI-002", "Use IoC Container", "Use built-in IServiceCollection or IoC containers", Severity::High),
            ("CS-DI-003", "Avoid New in Business Logic", "Avoid 'new' keyword for dependencies inside business logic", Severity::High),
            ("CS-DI-004", "Constructor Injection Only", "Use constructor injection, not property or method injection", Severity::Medium),
            ("CS-DI-005", "Service Lifetime Consistency", "Ensure consistent service lifetimes in DI registration", Severity::High),
        ],
    ),
    (
        "constants",
        "Constants & Magic Numbers",
        &[
            ("CS-CONST-001", "No Magic Numbers", "Avoid magic numbers or strings in code", Severity::Medium),
            ("CS-CONST-002", "Use Named Constants", "Use named constants or enums instead of literals", Severity::Medium),
            ("CS-CONST-003", "No Magic Strings", "Avoid magic strings in code", Severity::Medium),
        ],
    ),
    (
        "data_validation",
        "Data Validation",
        &[
            ("CS-VAL-001", "DTO Validation", "Always validate input DTOs using attributes or FluentValidation", Severity::High),
            ("CS-VAL-002", "Client and Server Validation", "Validate both client and server side", Severity::High),
            ("CS-VAL-003", "Null Checks", "Check for null before using objects", Severity::High),
            ("CS-VAL-004", "Guard Clauses", "Use guard clauses for parameter validation", Severity::Medium),
        ],
    ),
    (
        "logging",
        "Logging Standards",
        &[
            ("CS-LOG-001", "Structured Logging", "Use structured logging", Severity::High),
            ("CS-LOG-002", "No Sensitive Data in Logs", "Never log sensitive data (PIN, password, token)", Severity::Critical),
            ("CS-LOG-003", "Appropriate Log Levels", "Log at appropriate levels (Info, Warning, Error, Critical)", Severity::Medium),
            ("CS-LOG-004", "Include Correlation ID", "Include correlation/trace ID in logs for distributed tracing", Severity::Medium),
        ],
    ),
    (
        "documentation",
        "Code Comments & Documentation",
        &[
            ("CS-DOC-001", "XML Comments for Public APIs", "Use XML comments for public APIs", Severity::Medium),
            ("CS-DOC-002", "Comment Why Not What", "Comment why, not what - avoid redundant comments", Severity::Low),
            ("CS-DOC-003", "TODO Comments", "TODO comments should include ticket/issue reference", Severity::Low),
        ],
    ),
    (
        "immutability",
        "Immutability & Defensive Coding",
        &[
            ("CS-IMM-001", "Use Readonly", "Use readonly for fields that don't change after construction", Severity::Medium),
            ("CS-IMM-002", "No Mutable Collections", "Avoid exposing mutable collections", Severity::Medium),
            ("CS-IMM-003", "Clone External Data", "Clone or copy external data inputs", Severity::Medium),
            ("CS-IMM-004", "Use Records for DTOs", "Consider using records for immutable DTOs", Severity::Low),
        ],
    ),
    (
        "secure_configuration",
        "Secure Configuration",
        &[
            ("CS-CFG-001", "No Secrets in Source", "No secrets in source code or appsettings.json", Severity::Critical),
            ("CS-CFG-002", "Use Secret Managers", "Use environment variables or secret managers", Severity::Critical),
            ("CS-CFG-003", "Secure Connection Strings", "Connection strings should use integrated security or managed identity", Severity::High),
        ],
    ),
    (
        "secure_strings",
        "Secure String Handling",
        &[
            ("CS-STR-001", "No Plain Text Secrets", "Avoid keeping secrets as plain strings in memory", Severity::High),
            ("CS-STR-002", "Use SecureString", "Use SecureString or encrypt secrets in memory", Severity::High),
        ],
    ),
    (
        "unit_testing",
        "Unit Testing Standards",
        &[
            ("CS-TEST-001", "Test Naming Convention", "Use clear test names: MethodName_StateUnderTest_ExpectedBehavior", Severity::Medium),
            ("CS-TEST-002", "Single Assertion", "Prefer one logical assertion per test", Severity::Low),
            ("CS-TEST-003", "No External Dependencies", "No dependency on external systems in unit tests", Severity::High),
            ("CS-TEST-004", "Arrange-Act-Assert Pattern", "Tests should follow Arrange-Act-Assert pattern", Severity::Low),
            ("CS-TEST-005", "Test Class Naming", "Test classes should be named {ClassName}Tests", Severity::Low),
        ],
    ),
    (
        "cors",
        "CORS Configuration",
        &[
            ("API-CORS-001", "Specific CORS Origins", "Configure CORS with specific allowed origins, not AllowAnyOrigin", Severity::Critical),
            ("API-CORS-002", "No Credentials with Any Origin", "AllowCredentials cannot be used with AllowAnyOrigin", Severity::Critical),
        ],
    ),
    (
        "api_design",
        "API Design",
        &[
            ("API-REST-001", "RESTful Endpoints", "Use proper HTTP methods for CRUD operations", Severity::High),
            ("API-HTTP-001", "Appropriate Status Codes", "Return appropriate HTTP status codes", Severity::High),
            ("API-VER-001", "API Versioning", "Implement API versioning in routes", Severity::High),
            ("API-RESP-001", "Consistent Response Format", "Use a consistent API response wrapper", Severity::Medium),
            ("API-DOC-001", "Endpoint Documentation", "Document API endpoints with XML comments and response types", Severity::Medium),
        ],
    ),
    (
        "encryption",
        "Encryption",
        &[
            ("API-ENC-001", "Proper RSA Encryption", "Use proper RSA encryption with OAEP padding", Severity::Critical),
            ("API-ENC-002", "Strong Hashing Algorithms", "Use SHA-256 or stronger for hashing", Severity::Critical),
        ],
    ),
    (
        "idempotency",
        "Idempotency",
        &[
            ("API-IDEMP-001", "Idempotency Keys", "Use idempotency keys for financial operations", Severity::Critical),
        ],
    ),
    (
        "authentication",
        "Authentication & Authorization",
        &[
            ("API-AUTH-001", "Endpoint Authorization", "Protect endpoints with proper authorization", Severity::Critical),
            ("API-AUTH-002", "Resource-Level Authorization", "Verify user has access to specific resources", Severity::Critical),
        ],
    ),
    (
        "error_handling",
        "Error Handling",
        &[
            ("API-ERR-001", "Domain Exception Handling", "Handle domain-specific exceptions with appropriate responses", Severity::High),
            ("API-SAN-001", "Input Sanitization", "Sanitize all user inputs before processing", Severity::Critical),
        ],
    ),
    (
        "rate_limiting",
        "Rate Limiting",
        &[
            ("API-RATE-001", "Rate Limiting", "Implement rate limiting on API endpoints", Severity::High),
        ],
    ),
];

const DETAILS: &[Details] = &[
    Details {
        id: "CS-NAME-001",
        pattern: Some("^[A-Z][a-zA-Z0-9]*$"),
        good: "AccountService, IAccountRepository, TransactionHandler",
        bad: "accountservice, account_service, iAccountRepo",
        fix_hint: "Rename to start with uppercase letter, e.g., 'AccountService'",
    },
    Details {
        id: "CS-NAME-002",
        pattern: Some("^[A-Z][a-zA-Z0-9]*$"),
        good: "GetAccountBalance, ProcessPayment, ValidateInput",
        bad: "getbalance, process_payment, validateInput",
        fix_hint: "Rename to start with uppercase letter",
    },
    Details {
        id: "CS-NAME-003",
        pattern: Some("^[a-z][a-zA-Z0-9]*$"),
        good: "accountId, transactionAmount, userName",
        bad: "AccountId, transaction_amount, UserName",
        fix_hint: "Rename to start with lowercase letter",
    },
    Details {
        id: "CS-NAME-004",
        pattern: Some("^[A-Z][A-Z0-9_]*$"),
        good: "MAX_RETRY_COUNT, DEFAULT_TIMEOUT, API_VERSION",
        bad: "maxRetryCount, defaultTimeout, ApiVersion",
        fix_hint: "Rename using uppercase with underscores",
    },
    Details {
        id: "CS-NAME-005",
        pattern: Some("^_[a-z][a-zA-Z0-9]*$"),
        good: "_accountRepository, _logger, _transactionService",
        bad: "AccountRepo, accountRepository, _AccountRepo",
        fix_hint: "Rename with underscore prefix and lowercase",
    },
    Details {
        id: "CS-NAME-006",
        pattern: Some(".*Async$"),
        good: "GetAccountBalanceAsync, ProcessPaymentAsync",
        bad: "GetAccountBalance (for async methods)",
        fix_hint: "Add 'Async' suffix to async method names",
    },
    Details {
        id: "CS-NAME-007",
        pattern: Some("^I[A-Z][a-zA-Z0-9]*$"),
        good: "IAccountService, ITransactionRepository, ILogger",
        bad: "AccountServiceInterface, AccountService (for interfaces)",
        fix_hint: "Add 'I' prefix to interface names",
    },
    Details {
        id: "CS-NAME-008",
        pattern: Some("^[A-Z][a-zA-Z0-9]*(Request|Response)$"),
        good: "TransferRequest, AccountResponse, LoginRequest",
        bad: "TransferDTO, AccountData, LoginPayload",
        fix_hint: "Add 'Request' or 'Response' suffix",
    },
    Details {
        id: "CS-SEC-001",
        pattern: None,
        good: r#"cmd.Parameters.AddWithValue("@id", accountId);"#,
        bad: r#""SELECT * FROM Accounts WHERE Id = '" + accountId + "'""#,
        fix_hint: "Use parameterized queries with @parameters",
    },
    Details {
        id: "CS-SEC-003",
        pattern: None,
        good: r#"_logger.LogInformation("Transfer for {AccountId}", accountId);"#,
        bad: r#"_logger.LogInformation($"Login with PIN {pin}");"#,
        fix_hint: "Remove sensitive data from log statements",
    },
    Details {
        id: "CS-ASYNC-002",
        pattern: None,
        good: "var result = await _service.GetAsync();",
        bad: "var result = _service.GetAsync().Result;",
        fix_hint: "Use 'await' instead of .Result or .Wait()",
    },
    Details {
        id: "CS-EXC-003",
        pattern: None,
        good: r#"catch (Exception ex) { _logger.LogError(ex, "Error"); throw; }"#,
        bad: "catch (Exception) { /* ignore */ }",
        fix_hint: "Log the exception or handle it meaningfully",
    },
    Details {
        id: "CS-DI-001",
        pattern: None,
        good: "private readonly ITransactionService _transactionService;",
        bad: "private readonly TransactionService _transactionService;",
        fix_hint: "Change type to interface",
    },
    Details {
        id: "API-CORS-001",
        pattern: None,
        good: r#"policy.WithOrigins("https://example.com").AllowCredentials();"#,
        bad: "policy.AllowAnyOrigin().AllowAnyMethod();",
        fix_hint: "Specify allowed origins with WithOrigins()",
    },
    Details {
        id: "API-AUTH-001",
        pattern: None,
        good: r#"[Authorize(Policy = "BankingCustomer")]"#,
        bad: r#"[HttpGet("accounts")] // no authorization"#,
        fix_hint: "Add [Authorize] attribute to secure endpoints",
    },
];

impl Catalog {
    /// The catalog shipped with the tool: 22 categories of C# and API standards.
    pub fn builtin() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|&(id, display_name, rules)| Category {
                id: id.to_string(),
                display_name: display_name.to_string(),
                rules: rules.iter().map(builtin_rule).collect(),
            })
            .collect();
        Catalog::new(categories)
    }
}

fn builtin_rule(&(id, name, description, severity): &RuleRow) -> Rule {
    let details = DETAILS.iter().find(|d| d.id == id);
    Rule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        severity,
        pattern: details.and_then(|d| d.pattern).map(str::to_string),
        good_example: details.map(|d| d.good.to_string()),
        bad_example: details.map(|d| d.bad.to_string()),
        fix_hint: details.map(|d| d.fix_hint.to_string()),
    }
}
