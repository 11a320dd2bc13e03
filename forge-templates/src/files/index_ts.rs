//! src/index.ts entry point generator.

use sdkforge_core::{GeneratedFile, ProjectContext};

use crate::{
    code_file::{CodeFile, Import},
    paths,
};

const PLACEHOLDER: &str = r#"// Entry point of the SDK. Export the public API from here.
export {};"#;

const SDK_CONFIG: &str = r#"export interface SdkConfig {
  /** Chain to connect to. Defaults to Ethereum mainnet. */
  chain?: Chain;
  /** JSON-RPC endpoint. Defaults to the chain's public RPC. */
  rpcUrl?: string;
}"#;

const CREATE_CLIENT: &str = r#"/**
 * Create a read-only client for the configured chain.
 */
export function createClient(config: SdkConfig = {}): PublicClient<Transport, Chain> {
  return createPublicClient({
    chain: config.chain ?? mainnet,
    transport: http(config.rpcUrl),
  });
}"#;

const GET_BLOCK_NUMBER: &str = r#"/**
 * Latest block number seen by the client.
 */
export async function getBlockNumber(client: PublicClient<Transport, Chain>): Promise<bigint> {
  return client.getBlockNumber();
}"#;

const TOKEN_BALANCE: &str = r#"/**
 * ERC-20 balance of `owner` for the token deployed at `token`.
 */
export async function getTokenBalance(
  client: PublicClient<Transport, Chain>,
  token: Address,
  owner: Address,
): Promise<bigint> {
  const contract = getContract({ address: token, abi: erc20Abi, client });
  return contract.read.balanceOf([owner]);
}"#;

/// The SDK entry point.
pub struct IndexTs {
    example: bool,
    contract_bindings: bool,
}

impl IndexTs {
    pub fn new(ctx: &ProjectContext) -> Self {
        Self {
            example: ctx.options.example_source,
            contract_bindings: ctx.options.include_contract_bindings,
        }
    }

    fn render_example(&self) -> String {
        let mut viem = Import::new("viem")
            .named("createPublicClient")
            .named("http");
        let mut viem_types = Import::new("viem")
            .named("Chain")
            .named("PublicClient")
            .named("Transport")
            .type_only();
        if self.contract_bindings {
            viem = viem.named("erc20Abi").named("getContract");
            viem_types = viem_types.named("Address");
        }

        let mut file = CodeFile::new()
            .import(viem)
            .import(viem_types)
            .import(Import::new("viem/chains").named("mainnet"))
            .add(SDK_CONFIG)
            .add(CREATE_CLIENT)
            .add(GET_BLOCK_NUMBER);
        if self.contract_bindings {
            file = file.add(TOKEN_BALANCE);
        }
        file.render()
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self) -> &str {
        paths::INDEX_TS
    }

    fn render(&self) -> String {
        if self.example {
            self.render_example()
        } else {
            CodeFile::new().add(PLACEHOLDER).render()
        }
    }
}

#[cfg(test)]
mod tests {
    use sdkforge_core::{GenerationOptions, ProjectName};

    use super::*;

    fn index(options: GenerationOptions) -> String {
        IndexTs::new(&ProjectContext::new(
            ProjectName::new("my-sdk").unwrap(),
            options,
        ))
        .render()
    }

    #[test]
    fn test_example_ships_client() {
        let code = index(GenerationOptions::default());
        assert!(code.contains("export function createClient"));
        assert!(!code.contains("getTokenBalance"));
        assert!(!code.contains("my-sdk"));
    }

    #[test]
    fn test_bindings_add_token_helper() {
        let code = index(GenerationOptions {
            include_contract_bindings: true,
            ..Default::default()
        });
        assert!(code.contains("import { createPublicClient, http, erc20Abi, getContract } from \"viem\";"));
        assert!(code.contains("export async function getTokenBalance"));
    }

    #[test]
    fn test_placeholder() {
        let code = index(GenerationOptions {
            example_source: false,
            ..Default::default()
        });
        assert_eq!(
            code,
            "// Entry point of the SDK. Export the public API from here.\nexport {};\n"
        );
    }
}
