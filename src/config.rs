use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

const DEFAULT_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub placeholder_video_url: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3001".into())
            .parse()
            .unwrap_or_else(|_| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3001));

        let placeholder_video_url =
            env::var("PLACEHOLDER_VIDEO_URL").unwrap_or_else(|_| DEFAULT_VIDEO_URL.to_string());

        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50 * 1024 * 1024);

        Ok(Self {
            listen_addr,
            placeholder_video_url,
            max_body_bytes,
        })
    }
}
