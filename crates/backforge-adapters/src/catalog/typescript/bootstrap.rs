//! Bootstrap, root module and tooling configuration.

use backforge_core::domain::{FileTemplate, RenderContext, TemplateGroup::Core};
use serde_json::json;

const COMMON_DIRS: [&str; 6] = [
    "src/common/decorators",
    "src/common/filters",
    "src/common/guards",
    "src/common/interceptors",
    "src/common/middleware",
    "src/common/pipes",
];

pub(super) fn templates(ctx: &RenderContext) -> Vec<FileTemplate> {
    let mut templates = vec![
        FileTemplate::new("src/main.ts", Core, ctx.render(MAIN)),
        FileTemplate::new("src/app.module.ts", Core, APP_MODULE),
        FileTemplate::new("src/config/env.ts", Core, ENV),
        FileTemplate::new("tsconfig.json", Core, format!("{:#}\n", tsconfig())),
        FileTemplate::new("tsconfig.build.json", Core, TSCONFIG_BUILD),
        FileTemplate::new("nest-cli.json", Core, NEST_CLI),
        FileTemplate::new(".eslintrc.js", Core, ESLINTRC),
        FileTemplate::new(".prettierrc", Core, PRETTIERRC),
    ];

    templates.extend(COMMON_DIRS.iter().map(|dir| FileTemplate::keep(dir, Core)));
    templates.push(FileTemplate::keep("src/utils", Core));
    templates
}

fn tsconfig() -> serde_json::Value {
    json!({
        "compilerOptions": {
            "module": "commonjs",
            "declaration": true,
            "removeComments": true,
            "emitDecoratorMetadata": true,
            "experimentalDecorators": true,
            "allowSyntheticDefaultImports": true,
            "esModuleInterop": true,
            "target": "ES2021",
            "sourceMap": true,
            "outDir": "./dist",
            "baseUrl": "./",
            "incremental": true,
            "skipLibCheck": true,
            "strictNullChecks": true,
            "noImplicitAny": false,
            "strictBindCallApply": false,
            "forceConsistentCasingInFileNames": false,
            "noFallthroughCasesInSwitch": false,
            "resolveJsonModule": true
        }
    })
}

const MAIN: &str = r#"import { Logger, ValidationPipe } from '@nestjs/common';
import { NestFactory } from '@nestjs/core';
import { DocumentBuilder, SwaggerModule } from '@nestjs/swagger';
import compression from 'compression';
import helmet from 'helmet';

import { AppModule } from './app.module';
import { env } from './config/env';

async function bootstrap() {
  const logger = new Logger('Bootstrap');
  const app = await NestFactory.create(AppModule);

  app.use(helmet());
  app.use(compression());
  app.enableCors({ origin: env.CORS_ORIGINS, credentials: true });

  app.useGlobalPipes(
    new ValidationPipe({
      whitelist: true,
      forbidNonWhitelisted: true,
      transform: true,
      transformOptions: { enableImplicitConversion: true },
    }),
  );

  app.setGlobalPrefix('api/v1');

  if (env.NODE_ENV !== 'production') {
    const config = new DocumentBuilder()
      .setTitle('{{PROJECT_TITLE}}')
      .setDescription('{{PROJECT_NAME}} API')
      .setVersion('0.0.1')
      .addBearerAuth()
      .build();
    SwaggerModule.setup('api/docs', app, SwaggerModule.createDocument(app, config));
    logger.log('Swagger UI available at /api/docs');
  }

  await app.listen(env.PORT);
  logger.log(`Listening on ${await app.getUrl()} (${env.NODE_ENV})`);
}

bootstrap().catch((err) => {
  console.error('Fatal error during bootstrap', err);
  process.exit(1);
});
"#;

const APP_MODULE: &str = r#"import { Module } from '@nestjs/common';
import { ConfigModule } from '@nestjs/config';

import { AgentsModule } from './agents/agents.module';
import { DatabaseModule } from './database/database.module';
import { MonitoringModule } from './monitoring/monitoring.module';

@Module({
  imports: [
    ConfigModule.forRoot({ isGlobal: true, cache: true }),
    DatabaseModule,
    MonitoringModule,
    AgentsModule,
  ],
})
export class AppModule {}
"#;

const ENV: &str = r#"import { createEnv } from '@t3-oss/env-core';
import { z } from 'zod';

export const env = createEnv({
  server: {
    NODE_ENV: z.enum(['development', 'production', 'test']).default('development'),
    PORT: z.coerce.number().default(3000),
    CORS_ORIGINS: z
      .string()
      .default('*')
      .transform((s) => s.split(',')),

    DATABASE_URL: z.string().url(),
    REDIS_URL: z.string().url().optional(),

    OPENAI_API_KEY: z.string().min(1).optional(),
    ANTHROPIC_API_KEY: z.string().min(1).optional(),
    GOOGLE_GENERATIVE_AI_API_KEY: z.string().min(1).optional(),

    SENTRY_DSN: z.string().url().optional(),
  },
  runtimeEnv: process.env,
  emptyStringAsUndefined: true,
});
"#;

const TSCONFIG_BUILD: &str = r#"{
  "extends": "./tsconfig.json",
  "exclude": ["node_modules", "test", "dist", "**/*spec.ts"]
}
"#;

const NEST_CLI: &str = r#"{
  "$schema": "https://json.schemastore.org/nest-cli",
  "collection": "@nestjs/schematics",
  "sourceRoot": "src",
  "compilerOptions": {
    "deleteOutDir": true
  }
}
"#;

const ESLINTRC: &str = r#"module.exports = {
  parser: '@typescript-eslint/parser',
  parserOptions: {
    project: 'tsconfig.json',
    tsconfigRootDir: __dirname,
    sourceType: 'module',
  },
  plugins: ['@typescript-eslint/eslint-plugin'],
  extends: ['plugin:@typescript-eslint/recommended', 'plugin:prettier/recommended'],
  root: true,
  env: {
    node: true,
    jest: true,
  },
  ignorePatterns: ['.eslintrc.js', 'dist'],
  rules: {
    '@typescript-eslint/interface-name-prefix': 'off',
    '@typescript-eslint/explicit-function-return-type': 'off',
    '@typescript-eslint/explicit-module-boundary-types': 'off',
    '@typescript-eslint/no-explicit-any': 'off',
  },
};
"#;

const PRETTIERRC: &str = r#"{
  "singleQuote": true,
  "trailingComma": "all",
  "printWidth": 100,
  "tabWidth": 2,
  "semi": true,
  "endOfLine": "lf"
}
"#;
