//! Drizzle ORM persistence layer.

use backforge_core::domain::{FileTemplate, TemplateGroup::Core};

pub(super) fn templates(pgvector: bool) -> Vec<FileTemplate> {
    vec![
        FileTemplate::new("src/database/database.module.ts", Core, DATABASE_MODULE),
        FileTemplate::new("src/database/schema.ts", Core, schema(pgvector)),
        FileTemplate::new("drizzle.config.ts", Core, DRIZZLE_CONFIG),
        FileTemplate::keep("src/database/repositories", Core),
        FileTemplate::keep("src/database/migrations", Core),
        FileTemplate::keep("src/database/seeds", Core),
    ]
}

/// Conversation tables, plus an embeddings table when `pgvector` is set.
fn schema(pgvector: bool) -> String {
    let mut out = String::from(if pgvector { VECTOR_IMPORTS } else { IMPORTS });
    out.push_str(TABLES);
    if pgvector {
        out.push_str(DOCUMENTS_TABLE);
    }
    out
}

const DATABASE_MODULE: &str = r#"import { Global, Module } from '@nestjs/common';
import { drizzle } from 'drizzle-orm/postgres-js';
import postgres from 'postgres';

import { env } from '../config/env';
import * as schema from './schema';

export const DRIZZLE = Symbol('DRIZZLE');

@Global()
@Module({
  providers: [
    {
      provide: DRIZZLE,
      useFactory: () => {
        const client = postgres(env.DATABASE_URL, { max: 10, prepare: false });
        return drizzle(client, { schema });
      },
    },
  ],
  exports: [DRIZZLE],
})
export class DatabaseModule {}
"#;

const IMPORTS: &str =
    "import { integer, jsonb, pgTable, text, timestamp, uuid } from 'drizzle-orm/pg-core';\n";

const VECTOR_IMPORTS: &str = "import {\n  index,\n  integer,\n  jsonb,\n  pgTable,\n  text,\n  timestamp,\n  uuid,\n  vector,\n} from 'drizzle-orm/pg-core';\n";

const TABLES: &str = r#"
export const users = pgTable('users', {
  id: uuid('id').defaultRandom().primaryKey(),
  email: text('email').notNull().unique(),
  name: text('name').notNull(),
  role: text('role', { enum: ['user', 'admin'] }).default('user').notNull(),
  createdAt: timestamp('created_at').defaultNow().notNull(),
  updatedAt: timestamp('updated_at').defaultNow().notNull(),
});

export const conversations = pgTable('conversations', {
  id: uuid('id').defaultRandom().primaryKey(),
  userId: uuid('user_id')
    .references(() => users.id, { onDelete: 'cascade' })
    .notNull(),
  title: text('title').notNull(),
  createdAt: timestamp('created_at').defaultNow().notNull(),
  updatedAt: timestamp('updated_at').defaultNow().notNull(),
});

export const messages = pgTable('messages', {
  id: uuid('id').defaultRandom().primaryKey(),
  conversationId: uuid('conversation_id')
    .references(() => conversations.id, { onDelete: 'cascade' })
    .notNull(),
  role: text('role', { enum: ['user', 'assistant', 'system'] }).notNull(),
  content: text('content').notNull(),
  tokenCount: integer('token_count'),
  metadata: jsonb('metadata'),
  createdAt: timestamp('created_at').defaultNow().notNull(),
});
"#;

const DOCUMENTS_TABLE: &str = r#"
// Requires `CREATE EXTENSION IF NOT EXISTS vector;` on the database.
export const documents = pgTable(
  'documents',
  {
    id: uuid('id').defaultRandom().primaryKey(),
    content: text('content').notNull(),
    metadata: jsonb('metadata'),
    embedding: vector('embedding', { dimensions: 1536 }),
    createdAt: timestamp('created_at').defaultNow().notNull(),
  },
  (table) => ({
    embeddingIdx: index('documents_embedding_idx').using(
      'hnsw',
      table.embedding.op('vector_cosine_ops'),
    ),
  }),
);
"#;

const DRIZZLE_CONFIG: &str = r#"import 'dotenv/config';
import { defineConfig } from 'drizzle-kit';

export default defineConfig({
  schema: './src/database/schema.ts',
  out: './src/database/migrations',
  dialect: 'postgresql',
  dbCredentials: {
    url: process.env.DATABASE_URL ?? '',
  },
  verbose: true,
  strict: true,
});
"#;
