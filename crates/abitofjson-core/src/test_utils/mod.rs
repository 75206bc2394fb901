mod mock_json_server;

pub use mock_json_server::MockJsonServer;
