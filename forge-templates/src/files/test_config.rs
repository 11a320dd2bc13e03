//! Shared test configuration and helpers under test/config.

use sdkforge_core::GeneratedFile;

use crate::paths;

/// test/config/test.config.ts
pub struct TestConfig;

impl GeneratedFile for TestConfig {
    fn path(&self) -> &str {
        paths::TEST_CONFIG
    }

    fn render(&self) -> String {
        r#"import { mainnet } from "viem/chains";

/**
 * Settings shared by every test suite.
 *
 * Set `TEST_RPC_URL` to run the suites that talk to a live node.
 */
export const testConfig = {
  chain: mainnet,
  rpcUrl: process.env.TEST_RPC_URL,
  timeout: 30_000,
} as const;
"#
        .to_string()
    }
}

/// test/config/test.utils.ts
pub struct TestUtils;

impl GeneratedFile for TestUtils {
    fn path(&self) -> &str {
        paths::TEST_UTILS
    }

    fn render(&self) -> String {
        r#"import { createPublicClient, http } from "viem";
import { describe } from "vitest";
import { testConfig } from "./test.config";

/** Client pointed at the test node. */
export function makeTestClient() {
  return createPublicClient({
    chain: testConfig.chain,
    transport: http(testConfig.rpcUrl),
  });
}

/** `describe` that skips when no test node is configured. */
export const describeIfRpc = testConfig.rpcUrl ? describe : describe.skip;
"#
        .to_string()
    }
}
