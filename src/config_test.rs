use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 8081 ")).unwrap(), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_bind_addr(Some("::1")).unwrap().is_ipv6());
    assert!(matches!(
        parse_bind_addr(Some("localhost")),
        Err(ServerError::InvalidEnv { var: "BIND_ADDR", .. })
    ));
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:4100".parse::<SocketAddr>().unwrap());

    unsafe { clear_server_env() };
}
