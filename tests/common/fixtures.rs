//! Source fixtures shaped like the front-end files logscrub is run on.

/// A React hook with single-line, multi-line, and error logging
pub const HOOK_WITH_DEBUG_LOGS: &str = r#"import { useEffect, useState } from 'react';

export function useMembers(teamId: string) {
  const [members, setMembers] = useState([]);
  console.log('🔍 useMembers: fetching', teamId);

  useEffect(() => {
    fetch(`/api/members?team=${teamId}`)
      .then((res) => res.json())
      .then((data) => {
        console.log('📊 useMembers: received', {
          count: data.length,
          first: data[0],
        });
        setMembers(data);
      })
      .catch((err) => {
        console.error('❌ useMembers failed', err);
      });
  }, [teamId]);

  console.warn('⚠️ members may be stale');
  return members;
}
"#;

/// The hook above after scrubbing
pub const HOOK_SCRUBBED: &str = r#"import { useEffect, useState } from 'react';

export function useMembers(teamId: string) {
  const [members, setMembers] = useState([]);

  useEffect(() => {
    fetch(`/api/members?team=${teamId}`)
      .then((res) => res.json())
      .then((data) => {
        setMembers(data);
      })
      .catch((err) => {
        console.error('❌ useMembers failed', err);
      });
  }, [teamId]);

  return members;
}
"#;

/// A route handler with no tagged logging at all
pub const ROUTE_WITHOUT_TAGS: &str = r#"export async function GET() {
  console.log('plain message');
  return Response.json({ ok: true });
}
"#;
