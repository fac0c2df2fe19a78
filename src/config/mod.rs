//! Declarative, validated blueprints for the simulator's initial state.
//!
//! Defaults mirror a fresh session: a balanced pool of 1000/1000
//! (`k = 1 000 000`) and a generous user wallet of 10000/10000.

mod pool;
mod simulator;
mod wallet;

pub use pool::PoolConfig;
pub use simulator::SimulatorConfig;
pub use wallet::WalletConfig;
