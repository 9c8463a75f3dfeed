//! Minimal server-rendered pages
//!
//! Just enough markup to drive the browser-form flows; the JSON listing
//! and all state changes live in the `auth` and `secrets` crates.

use axum::response::Html;

pub async fn home_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Secrets</title></head>
<body>
  <h1>Secrets</h1>
  <p>Don't keep your secrets, share them anonymously!</p>
  <p><a href="/register">Register</a> | <a href="/login">Login</a></p>
</body>
</html>"#,
    )
}

pub async fn login_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Login</title></head>
<body>
  <h1>Login</h1>
  <form action="/login" method="post">
    <label>Username <input type="text" name="username" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Login</button>
  </form>
  <p><a href="/auth/google">Sign in with Google</a></p>
  <p><a href="/register">Need an account? Register</a></p>
</body>
</html>"#,
    )
}

pub async fn register_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Register</title></head>
<body>
  <h1>Register</h1>
  <form action="/register" method="post">
    <label>Username <input type="text" name="username" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Register</button>
  </form>
  <p><a href="/auth/google">Sign up with Google</a></p>
  <p><a href="/login">Already have an account? Login</a></p>
</body>
</html>"#,
    )
}

pub async fn submit_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Submit a Secret</title></head>
<body>
  <h1>Share a secret</h1>
  <form action="/submit" method="post">
    <textarea name="secret" rows="4" cols="50" required></textarea>
    <button type="submit">Submit</button>
  </form>
  <p><a href="/secrets">Back to secrets</a></p>
</body>
</html>"#,
    )
}
