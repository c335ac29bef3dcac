use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(AppConfig {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| String::from("mongodb://localhost:27017")),
            mongodb_db: env::var("MONGODB_DB").unwrap_or_else(|_| String::from("hamacas")),
            host: env::var("HOST").unwrap_or_else(|_| String::from("0.0.0.0")),
            port: env::var("PORT")
                .unwrap_or_else(|_| String::from("8000"))
                .parse()
                .map_err(|_| String::from("Invalid PORT value"))?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_address_joins_host_and_port() {
        let config = AppConfig {
            mongodb_uri: String::from("mongodb://localhost:27017"),
            mongodb_db: String::from("hamacas"),
            host: String::from("0.0.0.0"),
            port: 8000,
        };

        assert_eq!(config.server_address(), "0.0.0.0:8000");
    }
}
