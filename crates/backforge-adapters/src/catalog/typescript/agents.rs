//! Provider-agnostic agents module.
//!
//! Each LLM vendor sits behind one `LLMProvider` interface; the registry maps
//! model keys to a provider and a vendor model id. The chat feature is the
//! example domain and only ships at full depth.

use backforge_core::domain::{
    FileTemplate, GenerationDepth, LanguageModel, RenderContext, TemplateGroup::Core,
};

pub(super) fn templates(default_model: LanguageModel, depth: GenerationDepth) -> Vec<FileTemplate> {
    let full = depth.is_full();

    let mut templates = vec![
        FileTemplate::new(
            "src/agents/agents.module.ts",
            Core,
            if full { AGENTS_MODULE_FULL } else { AGENTS_MODULE },
        ),
        FileTemplate::new("src/agents/common/llm-provider.interface.ts", Core, PROVIDER_INTERFACE),
        FileTemplate::new(
            "src/agents/common/model-registry.ts",
            Core,
            model_registry(default_model),
        ),
        FileTemplate::new(
            "src/agents/providers/openai.provider.ts",
            Core,
            provider("OpenAIProvider", "openai", "createOpenAI", "@ai-sdk/openai", "OPENAI_API_KEY"),
        ),
        FileTemplate::new(
            "src/agents/providers/anthropic.provider.ts",
            Core,
            provider(
                "AnthropicProvider",
                "anthropic",
                "createAnthropic",
                "@ai-sdk/anthropic",
                "ANTHROPIC_API_KEY",
            ),
        ),
        FileTemplate::new(
            "src/agents/providers/google.provider.ts",
            Core,
            provider(
                "GoogleProvider",
                "google",
                "createGoogleGenerativeAI",
                "@ai-sdk/google",
                "GOOGLE_GENERATIVE_AI_API_KEY",
            ),
        ),
        FileTemplate::new("src/agents/providers/provider.factory.ts", Core, PROVIDER_FACTORY),
        FileTemplate::keep("src/agents/tools", Core),
    ];

    if full {
        templates.extend([
            FileTemplate::new("src/agents/chat/chat.module.ts", Core, CHAT_MODULE),
            FileTemplate::new("src/agents/chat/chat.controller.ts", Core, CHAT_CONTROLLER),
            FileTemplate::new("src/agents/chat/chat.service.ts", Core, CHAT_SERVICE),
            FileTemplate::new("src/agents/chat/dto/chat-request.dto.ts", Core, CHAT_DTO),
        ]);
    }

    templates
}

/// Registry entries for every supported model, with `default_model` as the default key.
fn model_registry(default_model: LanguageModel) -> String {
    let entries: String = LanguageModel::ALL
        .iter()
        .map(|model| {
            format!(
                "  '{key}': {{\n    modelId: '{id}',\n    provider: '{provider}',\n    contextWindow: {window},\n  }},\n",
                key = model.as_str(),
                id = model.model_id(),
                provider = model.provider(),
                window = model.context_window(),
            )
        })
        .collect();

    RenderContext::new("")
        .with_variable("REGISTRY_ENTRIES", entries.trim_end())
        .with_variable("DEFAULT_MODEL", default_model.as_str())
        .render(MODEL_REGISTRY)
}

fn provider(class: &str, name: &str, factory: &str, package: &str, key_var: &str) -> String {
    RenderContext::new("")
        .with_variable("CLASS", class)
        .with_variable("NAME", name)
        .with_variable("FACTORY", factory)
        .with_variable("PACKAGE", package)
        .with_variable("KEY_VAR", key_var)
        .render(PROVIDER)
}

const MODEL_REGISTRY: &str = r#"export type ProviderName = 'openai' | 'anthropic' | 'google';

export interface ModelConfig {
  modelId: string;
  provider: ProviderName;
  contextWindow: number;
}

export const MODEL_REGISTRY = {
{{REGISTRY_ENTRIES}}
} as const satisfies Record<string, ModelConfig>;

export type ModelKey = keyof typeof MODEL_REGISTRY;

export const MODEL_KEYS = Object.keys(MODEL_REGISTRY) as ModelKey[];

export const DEFAULT_MODEL: ModelKey = '{{DEFAULT_MODEL}}';

export function getModelConfig(key: ModelKey): ModelConfig {
  const config = MODEL_REGISTRY[key];
  if (!config) {
    throw new Error(`No model configuration for ${key}`);
  }
  return config;
}
"#;

const PROVIDER_INTERFACE: &str = r#"import { CoreMessage } from 'ai';

export interface GenerationOptions {
  modelId: string;
  temperature?: number;
  maxTokens?: number;
}

export interface GenerationResponse {
  content: string;
  usage: {
    promptTokens: number;
    completionTokens: number;
    totalTokens: number;
  };
  finishReason: string;
}

/** Contract every LLM vendor adapter implements. */
export interface LLMProvider {
  readonly providerName: string;

  generateResponse(messages: CoreMessage[], options: GenerationOptions): Promise<GenerationResponse>;

  streamResponse(messages: CoreMessage[], options: GenerationOptions): AsyncIterable<string>;

  healthCheck(modelId: string): Promise<boolean>;
}
"#;

const PROVIDER: &str = r#"import { {{FACTORY}} } from '{{PACKAGE}}';
import { CoreMessage, generateText, streamText } from 'ai';

import { env } from '../../config/env';
import {
  GenerationOptions,
  GenerationResponse,
  LLMProvider,
} from '../common/llm-provider.interface';

export class {{CLASS}} implements LLMProvider {
  readonly providerName = '{{NAME}}';
  private readonly client = {{FACTORY}}({ apiKey: env.{{KEY_VAR}} });

  async generateResponse(
    messages: CoreMessage[],
    options: GenerationOptions,
  ): Promise<GenerationResponse> {
    const { text, usage, finishReason } = await generateText({
      model: this.client(options.modelId),
      messages,
      temperature: options.temperature,
      maxTokens: options.maxTokens,
    });

    return {
      content: text,
      usage: {
        promptTokens: usage.promptTokens,
        completionTokens: usage.completionTokens,
        totalTokens: usage.totalTokens,
      },
      finishReason,
    };
  }

  async *streamResponse(messages: CoreMessage[], options: GenerationOptions): AsyncIterable<string> {
    const result = await streamText({
      model: this.client(options.modelId),
      messages,
      temperature: options.temperature,
      maxTokens: options.maxTokens,
    });
    yield* result.textStream;
  }

  async healthCheck(modelId: string): Promise<boolean> {
    try {
      await this.generateResponse([{ role: 'user', content: 'ping' }], { modelId, maxTokens: 1 });
      return true;
    } catch {
      return false;
    }
  }
}
"#;

const PROVIDER_FACTORY: &str = r#"import { Injectable } from '@nestjs/common';

import { LLMProvider } from '../common/llm-provider.interface';
import { ModelKey, ProviderName, getModelConfig } from '../common/model-registry';
import { AnthropicProvider } from './anthropic.provider';
import { GoogleProvider } from './google.provider';
import { OpenAIProvider } from './openai.provider';

@Injectable()
export class ProviderFactory {
  private readonly providers = new Map<ProviderName, LLMProvider>();

  /** Provider instance and vendor model id for a registry key. */
  create(model: ModelKey): { provider: LLMProvider; modelId: string } {
    const config = getModelConfig(model);
    return { provider: this.providerFor(config.provider), modelId: config.modelId };
  }

  private providerFor(name: ProviderName): LLMProvider {
    let provider = this.providers.get(name);
    if (!provider) {
      provider = ProviderFactory.build(name);
      this.providers.set(name, provider);
    }
    return provider;
  }

  private static build(name: ProviderName): LLMProvider {
    switch (name) {
      case 'openai':
        return new OpenAIProvider();
      case 'anthropic':
        return new AnthropicProvider();
      case 'google':
        return new GoogleProvider();
    }
  }
}
"#;

const AGENTS_MODULE: &str = r#"import { Module } from '@nestjs/common';

import { ProviderFactory } from './providers/provider.factory';

@Module({
  providers: [ProviderFactory],
  exports: [ProviderFactory],
})
export class AgentsModule {}
"#;

const AGENTS_MODULE_FULL: &str = r#"import { Module } from '@nestjs/common';

import { ChatModule } from './chat/chat.module';
import { ProviderFactory } from './providers/provider.factory';

@Module({
  imports: [ChatModule],
  providers: [ProviderFactory],
  exports: [ProviderFactory],
})
export class AgentsModule {}
"#;

const CHAT_MODULE: &str = r#"import { Module } from '@nestjs/common';

import { ProviderFactory } from '../providers/provider.factory';
import { ChatController } from './chat.controller';
import { ChatService } from './chat.service';

@Module({
  controllers: [ChatController],
  providers: [ChatService, ProviderFactory],
})
export class ChatModule {}
"#;

const CHAT_CONTROLLER: &str = r#"import { Body, Controller, MessageEvent, Post, Sse } from '@nestjs/common';
import { ApiOperation, ApiResponse, ApiTags } from '@nestjs/swagger';
import { Observable } from 'rxjs';

import { ChatService } from './chat.service';
import { ChatRequestDto, ChatResponseDto } from './dto/chat-request.dto';

@ApiTags('chat')
@Controller('chat')
export class ChatController {
  constructor(private readonly chatService: ChatService) {}

  @Post('message')
  @ApiOperation({ summary: 'Send a message to an agent' })
  @ApiResponse({ status: 201, type: ChatResponseDto })
  sendMessage(@Body() dto: ChatRequestDto): Promise<ChatResponseDto> {
    return this.chatService.processMessage(dto);
  }

  @Post('stream')
  @Sse()
  @ApiOperation({ summary: 'Stream an agent reply as server-sent events' })
  streamMessage(@Body() dto: ChatRequestDto): Observable<MessageEvent> {
    return this.chatService.streamMessage(dto);
  }
}
"#;

const CHAT_SERVICE: &str = r#"import { Injectable, Logger, MessageEvent } from '@nestjs/common';
import { CoreMessage } from 'ai';
import { Observable, from, map } from 'rxjs';

import { ProviderFactory } from '../providers/provider.factory';
import { ChatRequestDto, ChatResponseDto } from './dto/chat-request.dto';

@Injectable()
export class ChatService {
  private readonly logger = new Logger(ChatService.name);

  constructor(private readonly providerFactory: ProviderFactory) {}

  async processMessage(dto: ChatRequestDto): Promise<ChatResponseDto> {
    this.logger.log(`chat request for ${dto.model}`);
    const { provider, modelId } = this.providerFactory.create(dto.model);

    const response = await provider.generateResponse(toCoreMessages(dto), {
      modelId,
      temperature: dto.temperature,
      maxTokens: dto.maxTokens,
    });

    return {
      content: response.content,
      role: 'assistant',
      model: dto.model,
      usage: response.usage,
    };
  }

  streamMessage(dto: ChatRequestDto): Observable<MessageEvent> {
    const { provider, modelId } = this.providerFactory.create(dto.model);
    const chunks = provider.streamResponse(toCoreMessages(dto), {
      modelId,
      temperature: dto.temperature,
    });
    return from(chunks).pipe(map((data) => ({ data })));
  }
}

function toCoreMessages(dto: ChatRequestDto): CoreMessage[] {
  return dto.messages.map((m) => ({ role: m.role, content: m.content }) as CoreMessage);
}
"#;

const CHAT_DTO: &str = r#"import { ApiProperty, ApiPropertyOptional } from '@nestjs/swagger';
import { Type } from 'class-transformer';
import {
  IsArray,
  IsIn,
  IsNumber,
  IsOptional,
  IsString,
  Max,
  Min,
  ValidateNested,
} from 'class-validator';

import { DEFAULT_MODEL, MODEL_KEYS, ModelKey } from '../../common/model-registry';

const ROLES = ['user', 'assistant', 'system'] as const;

export class ChatMessageDto {
  @ApiProperty({ enum: ROLES })
  @IsIn(ROLES)
  role: (typeof ROLES)[number];

  @ApiProperty()
  @IsString()
  content: string;
}

export class ChatRequestDto {
  @ApiProperty({ enum: MODEL_KEYS, default: DEFAULT_MODEL })
  @IsIn(MODEL_KEYS)
  model: ModelKey = DEFAULT_MODEL;

  @ApiProperty({ type: [ChatMessageDto] })
  @IsArray()
  @ValidateNested({ each: true })
  @Type(() => ChatMessageDto)
  messages: ChatMessageDto[];

  @ApiPropertyOptional({ minimum: 0, maximum: 2 })
  @IsOptional()
  @IsNumber()
  @Min(0)
  @Max(2)
  temperature?: number;

  @ApiPropertyOptional()
  @IsOptional()
  @IsNumber()
  maxTokens?: number;
}

export class ChatResponseDto {
  @ApiProperty()
  content: string;

  @ApiProperty()
  role: string;

  @ApiProperty()
  model: string;

  @ApiPropertyOptional()
  usage?: {
    promptTokens: number;
    completionTokens: number;
    totalTokens: number;
  };
}
"#;
