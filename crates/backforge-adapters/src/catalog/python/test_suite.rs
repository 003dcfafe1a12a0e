//! `tests/` tree of the FastAPI project.

use backforge_core::domain::{FileTemplate, GenerationDepth, TemplateGroup::Tests};

pub(super) fn templates(depth: GenerationDepth) -> Vec<FileTemplate> {
    let mut templates = vec![
        FileTemplate::new("tests/__init__.py", Tests, ""),
        FileTemplate::new("tests/conftest.py", Tests, CONFTEST),
        FileTemplate::new("tests/unit/__init__.py", Tests, ""),
        FileTemplate::new("tests/integration/__init__.py", Tests, ""),
        FileTemplate::new("tests/integration/test_health.py", Tests, TEST_HEALTH),
    ];

    if depth.is_full() {
        templates.extend([
            FileTemplate::new("tests/unit/test_services.py", Tests, TEST_SERVICES),
            FileTemplate::new("tests/unit/test_repositories.py", Tests, TEST_REPOSITORIES),
            FileTemplate::new("tests/integration/test_users_endpoint.py", Tests, TEST_USERS),
        ]);
    }

    templates
}

const CONFTEST: &str = r#"import pytest
from httpx import ASGITransport, AsyncClient

from app.main import app


@pytest.fixture
async def client():
    async with AsyncClient(transport=ASGITransport(app=app), base_url="http://test") as ac:
        yield ac
"#;

const TEST_HEALTH: &str = r#"async def test_health_reports_ok(client):
    response = await client.get("/health")
    assert response.status_code == 200
    assert response.json() == {"status": "ok"}
"#;

const TEST_SERVICES: &str = r#"from unittest.mock import AsyncMock

import pytest

from app.core.exceptions import DuplicateEmailError, InstanceNotFoundError
from app.schemas.user import UserCreate
from app.services.user import UserService


@pytest.fixture
def repository():
    return AsyncMock()


@pytest.fixture
def cache():
    mock = AsyncMock()
    mock.get.return_value = None
    return mock


async def test_get_missing_user_raises(repository, cache):
    repository.get_by_id.return_value = None
    service = UserService(repository, cache)

    with pytest.raises(InstanceNotFoundError):
        await service.get_by_id(42)


async def test_create_rejects_duplicate_email(repository, cache):
    repository.email_exists.return_value = True
    service = UserService(repository, cache)

    with pytest.raises(DuplicateEmailError):
        await service.create(UserCreate(email="a@example.com", name="A", password="secret"))
"#;

const TEST_REPOSITORIES: &str = r#"from unittest.mock import AsyncMock, MagicMock

from app.models.user import User
from app.repositories.user import UserRepository


async def test_email_exists_is_false_without_match():
    db = AsyncMock()
    result = MagicMock()
    result.scalar_one_or_none.return_value = None
    db.execute.return_value = result

    assert await UserRepository(db).email_exists("nobody@example.com") is False


async def test_create_commits_and_refreshes():
    db = AsyncMock()
    db.add = MagicMock()
    user = User(email="a@example.com", name="A", hashed_password="x")

    await UserRepository(db).create(user)

    db.add.assert_called_once_with(user)
    db.commit.assert_awaited_once()
    db.refresh.assert_awaited_once_with(user)
"#;

const TEST_USERS: &str = r#"from unittest.mock import AsyncMock

from app.api.deps import get_user_service
from app.main import app
from app.schemas.user import UserResponse


async def test_get_user_returns_service_result(client):
    service = AsyncMock()
    service.get_by_id.return_value = UserResponse(id=1, email="a@example.com", name="A")
    app.dependency_overrides[get_user_service] = lambda: service

    try:
        response = await client.get("/api/v1/users/1")
    finally:
        app.dependency_overrides.clear()

    assert response.status_code == 200
    assert response.json()["email"] == "a@example.com"
"#;
