//! Jest unit and e2e tests of the NestJS project.

use backforge_core::domain::{FileTemplate, GenerationDepth, TemplateGroup::Tests};

pub(super) fn templates(depth: GenerationDepth) -> Vec<FileTemplate> {
    let mut templates = vec![
        FileTemplate::new("test/app.e2e-spec.ts", Tests, E2E_SPEC),
        FileTemplate::new("test/jest-e2e.json", Tests, JEST_E2E),
        FileTemplate::new(
            "src/agents/providers/provider.factory.spec.ts",
            Tests,
            FACTORY_SPEC,
        ),
    ];

    // The chat feature only exists at full depth.
    if depth.is_full() {
        templates.push(FileTemplate::new(
            "src/agents/chat/chat.service.spec.ts",
            Tests,
            CHAT_SERVICE_SPEC,
        ));
    }

    templates
}

const E2E_SPEC: &str = r#"import { INestApplication } from '@nestjs/common';
import { Test } from '@nestjs/testing';
import request from 'supertest';

import { MonitoringModule } from '../src/monitoring/monitoring.module';

describe('Health (e2e)', () => {
  let app: INestApplication;

  beforeAll(async () => {
    const moduleRef = await Test.createTestingModule({
      imports: [MonitoringModule],
    }).compile();

    app = moduleRef.createNestApplication();
    await app.init();
  });

  afterAll(async () => {
    await app.close();
  });

  it('GET /health reports ok', () => {
    return request(app.getHttpServer()).get('/health').expect(200).expect({ status: 'ok' });
  });
});
"#;

const JEST_E2E: &str = r#"{
  "moduleFileExtensions": ["js", "json", "ts"],
  "rootDir": ".",
  "testEnvironment": "node",
  "testRegex": ".e2e-spec.ts$",
  "transform": {
    "^.+\\.(t|j)s$": "ts-jest"
  }
}
"#;

const FACTORY_SPEC: &str = r#"import { MODEL_KEYS, getModelConfig } from '../common/model-registry';
import { ProviderFactory } from './provider.factory';

describe('ProviderFactory', () => {
  const factory = new ProviderFactory();

  it.each(MODEL_KEYS)('resolves %s to its registered provider', (key) => {
    const { provider, modelId } = factory.create(key);
    const config = getModelConfig(key);

    expect(provider.providerName).toBe(config.provider);
    expect(modelId).toBe(config.modelId);
  });

  it('reuses provider instances', () => {
    const [first] = MODEL_KEYS;
    expect(factory.create(first).provider).toBe(factory.create(first).provider);
  });
});
"#;

const CHAT_SERVICE_SPEC: &str = r#"import { Test } from '@nestjs/testing';

import { DEFAULT_MODEL } from '../common/model-registry';
import { ProviderFactory } from '../providers/provider.factory';
import { ChatService } from './chat.service';

describe('ChatService', () => {
  const generateResponse = jest.fn();
  let service: ChatService;

  beforeEach(async () => {
    generateResponse.mockResolvedValue({
      content: 'hi there',
      usage: { promptTokens: 3, completionTokens: 2, totalTokens: 5 },
      finishReason: 'stop',
    });

    const moduleRef = await Test.createTestingModule({
      providers: [
        ChatService,
        {
          provide: ProviderFactory,
          useValue: {
            create: () => ({ provider: { generateResponse }, modelId: 'test-model' }),
          },
        },
      ],
    }).compile();

    service = moduleRef.get(ChatService);
  });

  it('returns the provider reply as an assistant message', async () => {
    const reply = await service.processMessage({
      model: DEFAULT_MODEL,
      messages: [{ role: 'user', content: 'hello' }],
    });

    expect(reply.content).toBe('hi there');
    expect(reply.role).toBe('assistant');
    expect(reply.usage?.totalTokens).toBe(5);
    expect(generateResponse).toHaveBeenCalledWith(
      [{ role: 'user', content: 'hello' }],
      expect.objectContaining({ modelId: 'test-model' }),
    );
  });
});
"#;
