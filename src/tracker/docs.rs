use crate::error::{TrackerError, TrackerResult};
use crate::models::docs::{CodeSnippet, DocSection, DocTab, SuiteResult, TestSuiteSummary};

const BUG_FORM_UNIT_TEST: &str = r#"import { render, screen, fireEvent, waitFor } from '@testing-library/react';
import { BugForm } from '../components/bug-tracker/BugForm';

describe('BugForm Component', () => {
  test('validates required fields', async () => {
    render(<BugForm onSubmit={jest.fn()} onCancel={jest.fn()} />);
    fireEvent.click(screen.getByTestId('submit-button'));

    await waitFor(() => {
      expect(screen.getByTestId('title-error')).toHaveTextContent('Title is required');
      expect(screen.getByTestId('reporter-error')).toHaveTextContent('Reporter name is required');
    });
  });
});"#;

const BUG_LIST_UNIT_TEST: &str = r#"import { render, screen, fireEvent } from '@testing-library/react';
import { BugList } from '../components/bug-tracker/BugList';

test('changes status through the select control', () => {
  const onUpdateBug = jest.fn();
  render(<BugList bugs={mockBugs} onUpdateBug={onUpdateBug} onDeleteBug={jest.fn()} />);

  fireEvent.change(screen.getByTestId('status-select-1'), { target: { value: 'resolved' } });
  expect(onUpdateBug).toHaveBeenCalledWith('1', { status: 'resolved' });
});"#;

const HELPERS_UNIT_TEST: &str = r#"import { validateEmail, formatDate } from '../utils/helpers';

describe('helpers', () => {
  test('validateEmail rejects malformed addresses', () => {
    expect(validateEmail('john@example.com')).toBe(true);
    expect(validateEmail('john@')).toBe(false);
  });

  test('formatDate renders ISO dates', () => {
    expect(formatDate('2024-01-15')).toBe('Jan 15, 2024');
  });
});"#;

const BUG_API_TEST: &str = r#"const request = require('supertest');
const app = require('../src/app');

describe('POST /api/bugs', () => {
  test('creates a bug report', async () => {
    const response = await request(app)
      .post('/api/bugs')
      .send({ title: 'Login form validation error', description: 'Email validation allows invalid formats', reporter: 'John Doe' })
      .expect(201);

    expect(response.body.bug).toHaveProperty('id');
    expect(response.body.bug).toHaveProperty('createdAt');
  });

  test('rejects a bug without a title', async () => {
    await request(app).post('/api/bugs').send({ description: 'Missing title and reporter' }).expect(400);
  });
});"#;

const DATABASE_TEST: &str = r#"const { MongoMemoryServer } = require('mongodb-memory-server');
const mongoose = require('mongoose');

let mongo;
beforeAll(async () => {
  mongo = await MongoMemoryServer.create();
  await mongoose.connect(mongo.getUri());
});

afterAll(async () => {
  await mongoose.disconnect();
  await mongo.stop();
});"#;

const BUG_FLOW_E2E_TEST: &str = r#"describe('Bug Tracker E2E', () => {
  beforeEach(() => cy.visit('/bug-tracker'));

  it('creates a bug report', () => {
    cy.get('[data-testid="create-bug-button"]').click();
    cy.get('[data-testid="title-input"]').type('Login form validation error');
    cy.get('[data-testid="description-input"]').type('The email validation accepts invalid formats');
    cy.get('[data-testid="reporter-input"]').type('John Doe');
    cy.get('[data-testid="tag-input"]').type('frontend');
    cy.get('[data-testid="add-tag-button"]').click();
    cy.get('[data-testid="submit-button"]').click();
  });

  it('searches bugs by title', () => {
    cy.get('[data-testid="search-input"]').type('login');
    cy.get('[data-testid="bug-title-1"]').should('be.visible');
    cy.get('[data-testid="bug-title-2"]').should('not.exist');
  });
});"#;

const ERROR_BOUNDARY: &str = r#"class ErrorBoundary extends React.Component {
  state = { hasError: false };

  static getDerivedStateFromError() {
    return { hasError: true };
  }

  componentDidCatch(error, errorInfo) {
    console.error('Error caught by boundary:', error, errorInfo);
  }

  render() {
    return this.state.hasError ? <h2>Something went wrong.</h2> : this.props.children;
  }
}"#;

const DEBUG_LOGGING: &str = r#"const debugLog = (component, action, data) => {
  if (process.env.NODE_ENV === 'development') {
    console.group(`[${component}] ${action}`);
    console.log('Data:', data);
    console.log('Timestamp:', new Date().toISOString());
    console.groupEnd();
  }
};"#;

const SERVER_DEBUG_MIDDLEWARE: &str = r#"const requestLogger = (req, res, next) => {
  const start = Date.now();
  res.on('finish', () => {
    console.log(`${req.method} ${req.originalUrl} ${res.statusCode} ${Date.now() - start}ms`);
  });
  next();
};

app.use(requestLogger);"#;

const CI_PIPELINE: &str = r#"name: Deploy MERN Bug Tracker

on:
  push:
    branches: [ main ]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
    - uses: actions/checkout@v3
    - uses: actions/setup-node@v3
      with:
        node-version: '18'
        cache: 'npm'
    - run: npm ci
    - run: npm test -- --coverage --watchAll=false"#;

const ENV_CONFIG: &str = r#"# .env.development
NODE_ENV=development
MONGODB_URI=mongodb://localhost:27017/bugtracker_dev
FRONTEND_URL=http://localhost:3000
PORT=5000

# .env.production
NODE_ENV=production
FRONTEND_URL=https://your-app.vercel.app
PORT=5000"#;

const COVERAGE_THRESHOLDS: &str = r#"// jest.config.js
module.exports = {
  collectCoverageFrom: ['src/**/*.{js,jsx}', '!src/index.js'],
  coverageThreshold: {
    global: { branches: 80, functions: 80, lines: 85, statements: 85 }
  }
};"#;

const PROJECT_LAYOUT: &str = r#"mern-testing/
  client/
    src/
      components/
      tests/
        unit/
        integration/
    cypress/
  server/
    src/
    tests/"#;

/// The fixed results shown on the overview tab.
pub const TEST_SUMMARY: TestSuiteSummary = TestSuiteSummary {
    unit: SuiteResult { passed: 12, failed: 0, total: 12 },
    integration: SuiteResult { passed: 8, failed: 1, total: 9 },
    e2e: SuiteResult { passed: 5, failed: 0, total: 5 },
    coverage_percent: 85,
};

pub fn catalog() -> Vec<DocSection> {
    DocTab::ALL.into_iter().map(section).collect()
}

pub fn find_section(id: &str) -> TrackerResult<DocSection> {
    id.parse::<DocTab>()
        .map(section)
        .map_err(|_| TrackerError::UnknownTab(id.to_string()))
}

pub fn section(tab: DocTab) -> DocSection {
    match tab {
        DocTab::Overview => DocSection {
            tab,
            title: "Testing Strategy",
            summary: "Unit tests with Jest and React Testing Library, API tests with Supertest, end-to-end flows with Cypress, and browser DevTools for debugging.",
            snippets: vec![snippet("project-structure", "Project Structure", "text", PROJECT_LAYOUT)],
        },
        DocTab::Unit => DocSection {
            tab,
            title: "Unit Testing",
            summary: "Component and helper tests that run in isolation with mocked callbacks.",
            snippets: vec![
                snippet("bug-form", "BugForm validation", "javascript", BUG_FORM_UNIT_TEST),
                snippet("bug-list", "BugList status changes", "javascript", BUG_LIST_UNIT_TEST),
                snippet("helpers", "Utility functions", "javascript", HELPERS_UNIT_TEST),
            ],
        },
        DocTab::Integration => DocSection {
            tab,
            title: "Integration Testing",
            summary: "API routes exercised end to end against an in-memory database.",
            snippets: vec![
                snippet("bug-api", "Bug API routes", "javascript", BUG_API_TEST),
                snippet("database", "In-memory MongoDB", "javascript", DATABASE_TEST),
            ],
        },
        DocTab::E2e => DocSection {
            tab,
            title: "End-to-End Testing",
            summary: "Cypress flows driven through the data-testid hooks of the bug tracker UI.",
            snippets: vec![snippet("bug-flow", "Bug creation and search", "javascript", BUG_FLOW_E2E_TEST)],
        },
        DocTab::Debugging => DocSection {
            tab,
            title: "Debugging Techniques",
            summary: "Error boundaries, structured console logging and request tracing middleware.",
            snippets: vec![
                snippet("error-boundary", "React error boundary", "javascript", ERROR_BOUNDARY),
                snippet("debug-logging", "Grouped debug logging", "javascript", DEBUG_LOGGING),
                snippet("server-middleware", "Request timing middleware", "javascript", SERVER_DEBUG_MIDDLEWARE),
            ],
        },
        DocTab::Deployment => DocSection {
            tab,
            title: "Deployment",
            summary: "CI pipeline and per-environment configuration for shipping the tracker.",
            snippets: vec![
                snippet("ci-pipeline", "GitHub Actions pipeline", "yaml", CI_PIPELINE),
                snippet("env-config", "Environment configuration", "bash", ENV_CONFIG),
            ],
        },
        DocTab::Coverage => DocSection {
            tab,
            title: "Coverage",
            summary: "Coverage collection and the thresholds the pipeline enforces.",
            snippets: vec![snippet("thresholds", "Jest coverage thresholds", "javascript", COVERAGE_THRESHOLDS)],
        },
    }
}

fn snippet(
    id: &'static str,
    title: &'static str,
    language: &'static str,
    code: &'static str,
) -> CodeSnippet {
    CodeSnippet {
        id,
        title,
        language,
        code,
    }
}
