mod credentials;
mod load_dotenv;

pub use credentials::{basic_auth, bearer_auth, credential_string};
pub use load_dotenv::load_dotenv;
