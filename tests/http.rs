use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct ItemView {
    id: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ListDetail {
    key: String,
    completed: usize,
    total: usize,
    complete: bool,
    items: Vec<ItemView>,
}

#[derive(Debug, Deserialize)]
struct ListSummary {
    key: String,
    total: usize,
}

#[derive(Debug, Deserialize)]
struct CustomGroup {
    key: String,
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CustomAddResponse {
    added: usize,
    groups: Vec<CustomGroup>,
}

#[derive(Debug, Deserialize)]
struct Reminders {
    enabled: bool,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("athkar_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/lists")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_athkar_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post_detail(client: &Client, url: String, body: Option<serde_json::Value>) -> ListDetail {
    let request = client.post(url);
    let request = match body {
        Some(body) => request.json(&body),
        None => request,
    };
    let response = request.send().await.unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_toggle_mark_all_and_reset() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    post_detail(&client, format!("{base}/api/lists/evening/reset"), None).await;

    let toggled = post_detail(
        &client,
        format!("{base}/api/lists/evening/toggle"),
        Some(serde_json::json!({ "id": "e1" })),
    )
    .await;
    assert_eq!(toggled.key, "evening");
    assert_eq!(toggled.completed, 1);
    assert_eq!(toggled.total, 4);
    assert!(toggled.items.iter().any(|item| item.id == "e1" && item.completed));

    let ignored = post_detail(
        &client,
        format!("{base}/api/lists/evening/toggle"),
        Some(serde_json::json!({ "id": "m1" })),
    )
    .await;
    assert_eq!(ignored.completed, 1);

    let all = post_detail(&client, format!("{base}/api/lists/evening/mark-all"), None).await;
    assert_eq!(all.completed, all.total);
    assert!(all.complete);

    let cleared = post_detail(&client, format!("{base}/api/lists/evening/reset"), None).await;
    assert_eq!(cleared.completed, 0);
    assert!(!cleared.complete);

    let fetched: ListDetail = client
        .get(format!("{base}/api/lists/evening"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.completed, 0);
}

#[tokio::test]
async fn http_unknown_list_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/lists/unknown_key", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .post(format!("{}/api/lists/unknown_key/mark-all", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .post(format!("{}/api/lists/morning/toggle", server.base_url))
        .json(&serde_json::json!({ "id": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_custom_daily_list() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let response = client
        .post(format!("{base}/api/custom"))
        .json(&serde_json::json!({ "category": "sleep" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let added: CustomAddResponse = response.json().await.unwrap();
    assert_eq!(added.added, 3);
    assert!(added.groups.iter().any(|g| g.key == "custom-sleep" && g.items.len() == 3));

    let again = client
        .post(format!("{base}/api/custom"))
        .json(&serde_json::json!({ "category": "sleep" }))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let toggled = post_detail(
        &client,
        format!("{base}/api/lists/custom-sleep/toggle"),
        Some(serde_json::json!({ "id": "s2" })),
    )
    .await;
    assert_eq!(toggled.completed, 1);
    assert_eq!(toggled.total, 3);

    let lists: Vec<ListSummary> = client
        .get(format!("{base}/api/lists"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(lists.iter().any(|l| l.key == "custom-sleep" && l.total == 3));

    for id in ["s1", "s2", "s3"] {
        let removed = client
            .delete(format!("{base}/api/custom/{id}"))
            .send()
            .await
            .unwrap();
        assert!(removed.status().is_success());
    }
    let missing = client
        .get(format!("{base}/api/lists/custom-sleep"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_reminders_toggle_and_index_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let set: Reminders = client
        .post(format!("{base}/api/reminders"))
        .json(&serde_json::json!({ "enabled": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(set.enabled);

    let read: Reminders = client
        .get(format!("{base}/api/reminders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(read.enabled);

    let html = client
        .get(format!("{base}/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("أذكار الصباح"));
    assert!(html.contains("/list/morning/toggle/m1"));
}

#[tokio::test]
async fn http_form_posts_redirect_home() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let base = &server.base_url;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    for path in [
        "/list/sleep/reset",
        "/list/sleep/toggle/s1",
        "/list/sleep/mark-all",
    ] {
        let response = client.post(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        let location = response.headers().get(reqwest::header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), "/");
    }

    let sleep: ListDetail = client
        .get(format!("{base}/api/lists/sleep"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(sleep.complete);

    let response = client
        .post(format!("{base}/list/unknown_key/reset"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
