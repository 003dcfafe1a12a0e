//! Dependency versions written into generated manifests.
//!
//! Every `package.json`, `pyproject.toml` and `requirements.txt` the catalog
//! emits reads from here, so bumping a version is a one-line change.

use backforge_core::domain::HashAlgorithm;

// ── TypeScript / NestJS ──────────────────────────────────────────────────────

pub const NESTJS: &str = "^10.0.0";
pub const NESTJS_CONFIG: &str = "^3.2.0";
pub const NESTJS_SWAGGER: &str = "^7.3.0";
pub const NESTJS_THROTTLER: &str = "^5.1.2";
pub const NESTJS_MAPPED_TYPES: &str = "*";
pub const NESTJS_BULLMQ: &str = "^10.1.0";
pub const BULLMQ: &str = "^5.4.1";

pub const AI_SDK: &str = "^3.0.13";
pub const AI_SDK_OPENAI: &str = "^0.0.14";
pub const AI_SDK_ANTHROPIC: &str = "^0.0.15";
pub const AI_SDK_GOOGLE: &str = "^0.0.13";

pub const DRIZZLE_ORM: &str = "^0.30.4";
pub const DRIZZLE_KIT: &str = "^0.20.14";
pub const POSTGRES: &str = "^3.4.4";

pub const ZOD: &str = "^3.22.4";
pub const T3_ENV_CORE: &str = "^0.9.2";
pub const CLASS_TRANSFORMER: &str = "^0.5.1";
pub const CLASS_VALIDATOR: &str = "^0.14.1";
pub const HELMET: &str = "^7.1.0";
pub const COMPRESSION: &str = "^1.7.4";
pub const REFLECT_METADATA: &str = "^0.2.0";
pub const RXJS: &str = "^7.8.1";

pub const ESLINT: &str = "^9.17.0";
pub const TYPESCRIPT_ESLINT: &str = "^8.20.0";
pub const ESLINT_CONFIG_PRETTIER: &str = "^9.1.0";
pub const ESLINT_PLUGIN_PRETTIER: &str = "^6.0.0";
pub const PRETTIER: &str = "^3.4.2";
pub const JEST: &str = "^29.7.0";
pub const TS_JEST: &str = "^29.1.0";
pub const SUPERTEST: &str = "^7.1.3";
pub const TYPESCRIPT: &str = "^5.1.3";
pub const TS_NODE: &str = "^10.9.1";
pub const TS_LOADER: &str = "^9.4.3";
pub const TSCONFIG_PATHS: &str = "^4.2.0";
pub const SOURCE_MAP_SUPPORT: &str = "^0.5.21";
pub const DOTENV: &str = "^16.4.5";
pub const TYPES_EXPRESS: &str = "^4.17.17";
pub const TYPES_JEST: &str = "^29.5.2";
pub const TYPES_NODE: &str = "^20.3.1";
pub const TYPES_SUPERTEST: &str = "^6.0.0";

/// Runtime dependencies of a generated NestJS project.
pub fn typescript_dependencies(include_queue: bool) -> Vec<(&'static str, &'static str)> {
    let mut deps = vec![
        ("@nestjs/common", NESTJS),
        ("@nestjs/core", NESTJS),
        ("@nestjs/config", NESTJS_CONFIG),
        ("@nestjs/platform-express", NESTJS),
        ("@nestjs/swagger", NESTJS_SWAGGER),
        ("@nestjs/throttler", NESTJS_THROTTLER),
        ("@nestjs/mapped-types", NESTJS_MAPPED_TYPES),
        ("reflect-metadata", REFLECT_METADATA),
        ("rxjs", RXJS),
        ("class-transformer", CLASS_TRANSFORMER),
        ("class-validator", CLASS_VALIDATOR),
        ("helmet", HELMET),
        ("compression", COMPRESSION),
        ("zod", ZOD),
        ("@t3-oss/env-core", T3_ENV_CORE),
        ("ai", AI_SDK),
        ("@ai-sdk/openai", AI_SDK_OPENAI),
        ("@ai-sdk/anthropic", AI_SDK_ANTHROPIC),
        ("@ai-sdk/google", AI_SDK_GOOGLE),
        ("drizzle-orm", DRIZZLE_ORM),
        ("postgres", POSTGRES),
    ];

    if include_queue {
        deps.push(("@nestjs/bullmq", NESTJS_BULLMQ));
        deps.push(("bullmq", BULLMQ));
    }

    deps
}

/// Development dependencies of a generated NestJS project.
pub fn typescript_dev_dependencies() -> Vec<(&'static str, &'static str)> {
    vec![
        ("@nestjs/cli", NESTJS),
        ("@nestjs/schematics", NESTJS),
        ("@nestjs/testing", NESTJS),
        ("@types/express", TYPES_EXPRESS),
        ("@types/jest", TYPES_JEST),
        ("@types/node", TYPES_NODE),
        ("@types/supertest", TYPES_SUPERTEST),
        ("@eslint/js", ESLINT),
        ("typescript-eslint", TYPESCRIPT_ESLINT),
        ("eslint", ESLINT),
        ("eslint-config-prettier", ESLINT_CONFIG_PRETTIER),
        ("eslint-plugin-prettier", ESLINT_PLUGIN_PRETTIER),
        ("jest", JEST),
        ("prettier", PRETTIER),
        ("source-map-support", SOURCE_MAP_SUPPORT),
        ("supertest", SUPERTEST),
        ("ts-jest", TS_JEST),
        ("ts-loader", TS_LOADER),
        ("ts-node", TS_NODE),
        ("tsconfig-paths", TSCONFIG_PATHS),
        ("typescript", TYPESCRIPT),
        ("drizzle-kit", DRIZZLE_KIT),
        ("dotenv", DOTENV),
    ]
}

// ── Python / FastAPI ─────────────────────────────────────────────────────────

/// `(requirement, minimum version)` for the generated FastAPI app.
pub fn python_requirements(hash: HashAlgorithm) -> Vec<(&'static str, &'static str)> {
    let hasher = match hash {
        HashAlgorithm::Argon2 => ("argon2-cffi", "23.1.0"),
        HashAlgorithm::Bcrypt => ("bcrypt", "4.2.0"),
    };

    vec![
        ("fastapi", "0.115.0"),
        ("uvicorn[standard]", "0.32.0"),
        ("sqlalchemy[asyncio]", "2.0.36"),
        ("asyncpg", "0.30.0"),
        ("alembic", "1.14.0"),
        ("pydantic[email]", "2.10.0"),
        ("pydantic-settings", "2.6.0"),
        ("passlib", "1.7.4"),
        hasher,
        ("pyjwt", "2.10.0"),
        ("redis", "5.2.0"),
        ("python-dotenv", "1.0.0"),
    ]
}

/// Development extras for the generated FastAPI app.
pub fn python_dev_requirements() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ruff", "0.8.4"),
        ("pytest", "8.3.0"),
        ("pytest-asyncio", "0.24.0"),
        ("httpx", "0.28.0"),
        ("pre-commit", "4.0.0"),
    ]
}

/// Render `name>=version` lines.
pub fn pin_lines(requirements: &[(&str, &str)]) -> Vec<String> {
    requirements
        .iter()
        .map(|(name, version)| format!("{name}>={version}"))
        .collect()
}
